use proptest::prelude::*;
use std::collections::BTreeSet;

use super::*;

#[test]
fn test_life105_basic() {
    let p = parse_life105("#Life 1.05\n*.*\n.*.").unwrap();
    assert_eq!(3, p.width());
    assert_eq!(2, p.height());
    assert_eq!(
        &[Run::new(0, 0, 1), Run::new(0, 2, 1), Run::new(1, 1, 1)],
        p.runs(),
    );
}

#[test]
fn test_life105_blocks() {
    // Glider split across two blocks, listed bottom block first and with a
    // blank line and description in between.
    let p = parse_life105(
        "\
#Life 1.05
#D Glider
#N
#P -1 0
***

#P -1 -2
.*
#D this line does not advance the row
..*
",
    )
    .unwrap();
    assert_eq!(3, p.width());
    assert_eq!(3, p.height());
    assert_eq!(
        &[Run::new(0, 1, 1), Run::new(1, 2, 1), Run::new(2, 0, 3)],
        p.runs(),
    );
}

#[test]
fn test_life105_merge_and_gaps() {
    let p = parse_life105("#Life 1.05\n**.***..*").unwrap();
    assert_eq!(9, p.width());
    assert_eq!(1, p.height());
    assert_eq!(
        &[Run::new(0, 0, 2), Run::new(0, 3, 3), Run::new(0, 8, 1)],
        p.runs(),
    );
}

#[test]
fn test_life105_blank_rows() {
    // Blank lines still advance the row within a block.
    let p = parse_life105("#Life 1.05\n*\n\n\n*").unwrap();
    assert_eq!(1, p.width());
    assert_eq!(4, p.height());
    assert_eq!(&[Run::new(0, 0, 1), Run::new(3, 0, 1)], p.runs());
}

#[test]
fn test_life105_overlapping_blocks() {
    let p = parse_life105("#Life 1.05\n#P 0 0\n**\n#P 1 0\n**").unwrap();
    assert_eq!(3, p.width());
    assert_eq!(&[Run::new(0, 0, 3)], p.runs());
}

#[test]
fn test_life105_errors() {
    assert_eq!(
        Err(LifError::EmptyPattern),
        parse_life105("#Life 1.05\n#D nothing here\n...\n"),
    );
    assert_eq!(
        Err(LifError::BadOriginDirective { line: 2 }),
        parse_life105("#Life 1.05\n#P one 2\n*"),
    );
    // Too few coordinates; treated as a comment.
    let p = parse_life105("#Life 1.05\n*\n#P 5\n*").unwrap();
    assert_eq!(&[Run::new(0, 0, 1), Run::new(1, 0, 1)], p.runs());
}

#[test]
fn test_life105_coordinate_overflow() {
    assert_eq!(
        Err(LifError::CoordinateOverflow),
        parse_life105("#Life 1.05\n#P 9223372036854775807 0\n.*"),
    );
    assert_eq!(
        Err(LifError::CoordinateOverflow),
        parse_life105("#Life 1.05\n#P 0 9223372036854775807\n*\n*"),
    );
    // Each coordinate fits, but the bounding box does not.
    assert_eq!(
        Err(LifError::CoordinateOverflow),
        parse_life105("#Life 1.05\n#P -9223372036854775808 0\n*\n#P 9223372036854775807 0\n*"),
    );
    // Extreme coordinates are fine on their own.
    let p = parse_life105("#Life 1.05\n#P 9223372036854775806 -9223372036854775808\n**").unwrap();
    assert_eq!(&[Run::new(0, 0, 2)], p.runs());
}

fn life105_blocks() -> impl Strategy<Value = Vec<((i64, i64), Vec<String>)>> {
    let row = prop::collection::vec(prop_oneof![Just('.'), Just('*')], 0..12)
        .prop_map(|chars| chars.into_iter().collect::<String>());
    let block = ((-20..20_i64, -20..20_i64), prop::collection::vec(row, 0..8));
    prop::collection::vec(block, 1..4)
}

proptest! {
    /// Tests that the runs reproduce exactly the `*` positions in the input.
    #[test]
    fn test_life105_cells(blocks in life105_blocks()) {
        let mut text = String::from("#Life 1.05\n");
        let mut expected = BTreeSet::new();
        for ((ox, oy), rows) in &blocks {
            text.push_str(&format!("#P {} {}\n", ox, oy));
            for (y, row) in rows.iter().enumerate() {
                for (x, ch) in row.chars().enumerate() {
                    if ch == '*' {
                        expected.insert((ox + x as i64, oy + y as i64));
                    }
                }
                text.push_str(row);
                text.push('\n');
            }
        }

        match parse_life105(&text) {
            Err(e) => {
                prop_assert_eq!(LifError::EmptyPattern, e);
                prop_assert!(expected.is_empty());
            }
            Ok(p) => {
                let min_x = expected.iter().map(|&(x, _)| x).min().unwrap();
                let min_y = expected.iter().map(|&(_, y)| y).min().unwrap();
                let actual: BTreeSet<(i64, i64)> = p
                    .cells()
                    .map(|(x, y)| (x as i64 + min_x, y as i64 + min_y))
                    .collect();
                prop_assert_eq!(expected.len(), p.population());
                prop_assert_eq!(expected, actual);
            }
        }
    }
}
