/*
 * transforms/split.rs
 * Copyright (c) 2025 Posit, PBC
 */

use wg21_pandoc_types::{Block, Blocks};

/// Split `children` at anchor blocks and indent everything in between.
///
/// Anchors are passed through `emit_anchor` in order. Each maximal run of
/// non-anchor blocks becomes one `BlockQuote`; empty runs produce nothing.
pub(crate) fn split_and_indent<F, G>(children: Blocks, is_anchor: F, mut emit_anchor: G) -> Blocks
where
    F: Fn(&Block) -> bool,
    G: FnMut(Block) -> Block,
{
    let mut output = Vec::new();
    let mut run = Vec::new();
    for block in children {
        if is_anchor(&block) {
            flush_run(&mut run, &mut output);
            output.push(emit_anchor(block));
        } else {
            run.push(block);
        }
    }
    flush_run(&mut run, &mut output);
    output
}

fn flush_run(run: &mut Blocks, output: &mut Blocks) {
    if !run.is_empty() {
        output.push(Block::block_quote(std::mem::take(run)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wg21_pandoc_types::Inline;

    fn is_rule(block: &Block) -> bool {
        matches!(block, Block::HorizontalRule(_))
    }

    fn para(text: &str) -> Block {
        Block::para(Inline::text(text))
    }

    #[test]
    fn test_runs_between_anchors_are_quoted() {
        let children = vec![
            para("a"),
            para("b"),
            Block::horizontal_rule(),
            para("c"),
        ];
        let result = split_and_indent(children, is_rule, |b| b);
        assert_eq!(
            result,
            vec![
                Block::block_quote(vec![para("a"), para("b")]),
                Block::horizontal_rule(),
                Block::block_quote(vec![para("c")]),
            ]
        );
    }

    #[test]
    fn test_adjacent_anchors_have_no_empty_quote() {
        let children = vec![Block::horizontal_rule(), Block::horizontal_rule()];
        let result = split_and_indent(children.clone(), is_rule, |b| b);
        assert_eq!(result, children);
    }

    #[test]
    fn test_empty_input() {
        assert!(split_and_indent(vec![], is_rule, |b| b).is_empty());
    }

    #[test]
    fn test_emit_anchor_sees_anchors_in_order() {
        let children = vec![
            Block::horizontal_rule(),
            para("x"),
            Block::horizontal_rule(),
        ];
        let mut seen = 0;
        let result = split_and_indent(children, is_rule, |_| {
            seen += 1;
            para(&seen.to_string())
        });
        assert_eq!(result[0], para("1"));
        assert_eq!(result[2], para("2"));
    }
}
