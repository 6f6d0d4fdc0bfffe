use color_eyre::Result;
use std::io::{self, Write};

use crate::command::Answer;
use crate::config::Config;
use crate::prefix_store::PrefixNode;
use crate::session::SessionResult;

pub fn answer(answer: &Answer, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", answer.count)?;
    out.flush()?;
    Ok(())
}

/// Answers have already been written by `answer`, only the tree is left.
pub fn call(config: &Config, result: &SessionResult, out: &mut dyn Write) -> Result<()> {
    if config.tree {
        print_tree(result.store.root(), out)?;
    }

    Ok(())
}

struct Row<'a> {
    node: &'a PrefixNode,
    letter: char,
    value: String,
    parent_count: usize,
    prefix: String,
    last: bool,
}

fn print_tree(root: &PrefixNode, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{:indent$}Contacts", "", indent = 30)?;
    writeln!(out, "ALL")?;

    // The root count is never exposed, so top level letters are measured
    // against their combined count.
    let total: usize = root.children().map(|(_, child)| child.count()).sum();
    let mut stack = child_rows(root, "", total, "");

    while let Some(row) = stack.pop() {
        let leaf_prefix = format!(
            "{}{}",
            row.prefix,
            if row.last { " └─ " } else { " ├─ " }
        );
        let leaf = format!("{}{} ({}) ", leaf_prefix, row.letter, row.value);

        writeln!(
            out,
            "{leaf:-<width$} {info}",
            leaf = leaf,
            width = 30,
            info = info_string(row.node.count(), row.parent_count),
        )?;

        let prefix = format!("{}{}", row.prefix, if row.last { "    " } else { " │  " });
        stack.extend(child_rows(row.node, &row.value, row.node.count(), &prefix));
    }

    Ok(())
}

// Reversed so that popping from the stack visits children alphabetically.
fn child_rows<'a>(
    node: &'a PrefixNode,
    value: &str,
    parent_count: usize,
    prefix: &str,
) -> Vec<Row<'a>> {
    let children: Vec<(char, &PrefixNode)> = node.children().collect();
    let last_child = children.len().saturating_sub(1);

    children
        .into_iter()
        .enumerate()
        .map(|(i, (letter, child))| Row {
            node: child,
            letter,
            value: format!("{}{}", value, letter),
            parent_count,
            prefix: prefix.to_string(),
            last: i == last_child,
        })
        .rev()
        .collect()
}

fn info_string(count: usize, parent_count: usize) -> String {
    format!(
        "{count} ({percentage:.2}%)",
        count = count,
        percentage = count as f32 / parent_count as f32 * 100.,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session;

    fn render(config: &Config, input: &str) -> String {
        let mut out = Vec::new();
        let result =
            session::run(config, input.as_bytes(), |found| answer(found, &mut out)).unwrap();
        call(config, &result, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_one_count_per_find() {
        let output = render(
            &Config::default(),
            "4\nadd hack\nadd hackerrank\nfind hac\nfind hak\n",
        );

        assert_eq!(output, "2\n0\n");
    }

    #[test]
    fn prints_tree_alphabetically() {
        let config = Config {
            tree: true,
            ..Config::default()
        };
        let output = render(&config, "4\nadd ba\nadd ab\nadd ac\nfind a\n");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "2");
        assert_eq!(lines[2], "ALL");
        assert!(lines[3].starts_with(" ├─ a (a) "), "{}", lines[3]);
        assert!(lines[3].ends_with(" 2 (66.67%)"), "{}", lines[3]);
        assert!(lines[4].starts_with(" │   ├─ b (ab) "), "{}", lines[4]);
        assert!(lines[4].ends_with(" 1 (50.00%)"), "{}", lines[4]);
        assert!(lines[5].starts_with(" │   └─ c (ac) "), "{}", lines[5]);
        assert!(lines[6].starts_with(" └─ b (b) "), "{}", lines[6]);
        assert!(lines[7].starts_with("     └─ a (ba) "), "{}", lines[7]);
        assert_eq!(lines.len(), 8);
    }
}
