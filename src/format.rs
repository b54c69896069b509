//! Text records in and out of the solver.
//!
//! Instance: a header `m p2 p3 p4`, then `m` lines of `<count> <ingredient>...`.
//! The leading count is skipped, not checked.
//!
//! Plan: the group count, then one `<size> <id>...` line per group, size-2
//! groups first.

use std::io::{self, BufRead, Read, Write};

use thiserror::Error;

use crate::model::group::Plan;
use crate::model::instance::Instance;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("missing header line")]
    MissingHeader,

    #[error("header must hold 4 fields, found {0}")]
    HeaderArity(usize),

    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },

    #[error("expected {expected} dish lines, found {found}")]
    MissingDish { expected: usize, found: usize },
}

struct Header {
    m: usize,
    p2: usize,
    p3: usize,
    p4: usize,
}

fn parse_header(line_no: usize, line: &str) -> Result<Header, FormatError> {
    let fields = line
        .split_whitespace()
        .map(|token| {
            token.parse::<usize>().map_err(|_| FormatError::InvalidNumber {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    match fields[..] {
        [m, p2, p3, p4] => Ok(Header { m, p2, p3, p4 }),
        _ => Err(FormatError::HeaderArity(fields.len())),
    }
}

pub fn parse_instance(text: &str) -> Result<Instance, FormatError> {
    let mut lines = text.lines().enumerate().skip_while(|(_, line)| line.trim().is_empty());
    let (header_idx, header_line) = lines.next().ok_or(FormatError::MissingHeader)?;
    let header = parse_header(header_idx + 1, header_line)?;

    let dishes = lines
        .take(header.m)
        .map(|(_, line)| line.split_whitespace().skip(1).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    if dishes.len() < header.m {
        return Err(FormatError::MissingDish { expected: header.m, found: dishes.len() });
    }

    Ok(Instance::new(header.p2, header.p3, header.p4, dishes))
}

pub fn read_instance<R: BufRead>(mut reader: R) -> Result<Instance, FormatError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_instance(&text)
}

pub fn write_plan<W: Write>(mut writer: W, plan: &Plan) -> io::Result<()> {
    writeln!(writer, "{}", plan.group_count())?;
    for group in plan.iter() {
        write!(writer, "{}", group.members.len())?;
        for id in &group.members {
            write!(writer, " {}", id)?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

pub fn format_plan(plan: &Plan) -> String {
    let mut buf = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_plan(&mut buf, plan);
    String::from_utf8_lossy(&buf).into_owned()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::condition::GroupSize;
    use crate::model::group::Group;

    const SAMPLE: &str = "5 1 2 1\n3 onion pepper olive\n3 mushroom tomato basil\n3 chicken mushroom pepper\n3 tomato mushroom basil\n2 chicken basil\n";

    #[test]
    fn parses_sample_instance() {
        let instance = parse_instance(SAMPLE).unwrap();
        assert_eq!(instance.dish_count(), 5);
        assert_eq!(instance.quota(GroupSize::Two), 2);
        assert_eq!(instance.quota(GroupSize::Three), 6);
        assert_eq!(instance.quota(GroupSize::Four), 4);
        let first = instance.ingredients_of(0).unwrap();
        assert!(first.contains("onion") && first.contains("olive"));
        assert!(!first.contains("3"));
        assert_eq!(instance.ingredients_of(4).unwrap().len(), 2);
    }

    #[test]
    fn ingredient_count_field_is_not_checked() {
        let instance = parse_instance("2 1 0 0\n5 a\n0 b c\n").unwrap();
        assert_eq!(instance.ingredients_of(0).unwrap().len(), 1);
        assert_eq!(instance.ingredients_of(1).unwrap().len(), 2);
    }

    #[test]
    fn extra_lines_are_ignored() {
        let instance = parse_instance("\n1 0 0 0\n1 a\n1 b\n").unwrap();
        assert_eq!(instance.dish_count(), 1);
    }

    #[test]
    fn rejects_bad_headers() {
        assert!(matches!(parse_instance(""), Err(FormatError::MissingHeader)));
        assert!(matches!(parse_instance("1 2 3\n"), Err(FormatError::HeaderArity(3))));
        assert!(matches!(
            parse_instance("2 -1 0 0\n"),
            Err(FormatError::InvalidNumber { line: 1, .. })
        ));
        assert!(matches!(
            parse_instance("3 1 0 0\n1 a\n"),
            Err(FormatError::MissingDish { expected: 3, found: 1 })
        ));
    }

    #[test]
    fn reads_from_buffer() {
        let instance = read_instance(SAMPLE.as_bytes()).unwrap();
        assert_eq!(instance.dish_count(), 5);
    }

    #[test]
    fn writes_groups_by_size() {
        let mut plan = Plan::empty();
        plan.push(GroupSize::Four, Group { members: vec![0, 4, 3, 1] }, 16);
        plan.push(GroupSize::Two, Group { members: vec![2, 5] }, 9);
        assert_eq!(format_plan(&plan), "2\n2 2 5\n4 0 4 3 1\n");
        assert_eq!(format_plan(&Plan::empty()), "0\n");
    }
}
