//! Built-in sample reports, used by `msgtree demo`.

use crate::application::ApplicationResult;
use crate::domain::Forest;

/// A small tree mixing a severity branch, plain messages and a nested message.
pub fn example() -> ApplicationResult<Forest> {
    let (mut forest, root) = Forest::with_title("Example Tree");

    forest.add_info(root, "I am an info branch!")?;
    forest.add_messages(
        root,
        ["Or we can use plain messages!", "And more plain messages"],
    )?;

    let debug = forest.add_debug(root, "I am a debug branch!")?;
    forest.add_message(
        debug,
        "plain messages can be added to info/debug/error/warn branches too",
    )?;

    Ok(forest)
}

/// Every severity label, including a four level deep chain.
pub fn severity_levels() -> ApplicationResult<Forest> {
    let (mut forest, root) = Forest::with_title("Severity Levels");

    let info = forest.add_info(root, "info branch")?;
    forest.add_messages(info, ["info metadata 1", "info metadata 2"])?;

    forest.add_message(root, "regular message")?;

    let debug = forest.add_debug(root, "debug branch")?;
    forest.add_messages(debug, ["debug metadata 1", "debug metadata 2"])?;

    let error = forest.add_error(root, "error branch")?;
    forest.add_messages(error, ["error metadata 1", "error metadata 2"])?;

    forest.add_messages(
        debug,
        ["more regular messages", "and some more regular messages"],
    )?;

    let nested_info = forest.add_info(root, "info branch 2")?;
    forest.add_message(nested_info, "info metadata")?;
    let nested_debug = forest.add_debug(nested_info, "debug branch within info branch")?;
    let nested_warn = forest.add_warn(
        nested_debug,
        "warn branch within debug branch, within info branch",
    )?;
    forest.add_error(
        nested_warn,
        "error branch within warn branch, within debug branch, within info branch",
    )?;

    Ok(forest)
}

/// Spacer lines between messages and branches.
pub fn line_breaks() -> ApplicationResult<Forest> {
    let (mut forest, root) = Forest::with_title("Line Breaks");

    let info = forest.add_info(root, "info branch")?;
    forest.add_message(info, "message 1")?;
    forest.add_break(info)?;
    forest.add_messages(info, ["message 2", "message 3"])?;
    for _ in 0..6 {
        forest.add_break(info)?;
    }
    forest.add_debug(info, "debug branch")?;
    forest.add_break(info)?;
    forest.add_messages(info, ["message 4", "message 5"])?;

    Ok(forest)
}

/// Plain groups nested inside each other.
pub fn nested_groups() -> ApplicationResult<Forest> {
    let (mut forest, root) = Forest::with_title("Nested Groups");

    forest.add_message(root, "first message")?;

    let inner = forest.add_group(root, "inner branch")?;
    forest.add_message(inner, "inner child")?;

    let deeper = forest.add_group(inner, "deeper branch")?;
    forest.add_message(deeper, "deeper child")?;

    Ok(forest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::example(example, 5)]
    #[case::severity_levels(severity_levels, 14)]
    #[case::line_breaks(line_breaks, 14)]
    #[case::nested_groups(nested_groups, 6)]
    fn test_report_node_counts(
        #[case] build: fn() -> ApplicationResult<Forest>,
        #[case] expected: usize,
    ) {
        let forest = build().unwrap();
        assert_eq!(forest.len(), expected);
    }
}
