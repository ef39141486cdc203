use optgroup::core::action::{Tap, try_update, update};
use optgroup::core::{Choice, GroupError, GroupOption, OptionGroupModel, Selection};

// ============================================================================
// Helper Functions
// ============================================================================

/// Three plain options titled "0", "1", "2"
fn plain_group() -> Vec<GroupOption> {
    vec![
        GroupOption::plain("0"),
        GroupOption::plain("1"),
        GroupOption::plain("2"),
    ]
}

/// A plain option followed by a multiple-choice option with five choices
fn mixed_group() -> Vec<GroupOption> {
    vec![
        GroupOption::plain("0"),
        GroupOption::multiple_choice(
            "1",
            (0..5).map(|i| Choice::new(format!("1.{i}"))).collect(),
        ),
    ]
}

/// Two multiple-choice options after a plain one
fn two_multi_group() -> Vec<GroupOption> {
    let mut options = mixed_group();
    options.push(GroupOption::multiple_choice(
        "2",
        vec![Choice::new("2.0").with_icon("a"), Choice::new("2.1")],
    ));
    options
}

// ============================================================================
// Plain Options
// ============================================================================

#[test]
fn test_initial_selection_none() {
    let model = OptionGroupModel::new(plain_group(), Selection::None);
    assert_eq!(model.current_selection(), &Selection::None);
}

#[test]
fn test_initial_plain_selection_honored() {
    let model = OptionGroupModel::new(plain_group(), Selection::single(1));
    assert_eq!(model.current_selection(), &Selection::single(1));
}

#[test]
fn test_select_from_none() {
    let mut model = OptionGroupModel::new(plain_group(), Selection::None);
    model.select_plain_option(0);
    assert_eq!(model.current_selection(), &Selection::single(0));
}

#[test]
fn test_select_replaces_initial() {
    let mut model = OptionGroupModel::new(plain_group(), Selection::single(1));
    model.select_plain_option(0);
    assert_eq!(model.current_selection(), &Selection::single(0));
}

#[test]
fn test_select_twice() {
    let mut model = OptionGroupModel::new(plain_group(), Selection::None);
    model.select_plain_option(0);
    assert_eq!(model.current_selection(), &Selection::single(0));
    model.select_plain_option(2);
    assert_eq!(model.current_selection(), &Selection::single(2));
}

#[test]
fn test_select_same_option_twice() {
    let mut model = OptionGroupModel::new(plain_group(), Selection::single(1));
    model.select_plain_option(0);
    model.select_plain_option(0);
    assert_eq!(model.current_selection(), &Selection::single(0));
}

// ============================================================================
// Multiple-Choice Options
// ============================================================================

#[test]
fn test_initial_multi_selection_honored() {
    let model = OptionGroupModel::new(mixed_group(), Selection::multi(1, [0, 4]));
    assert_eq!(model.current_selection(), &Selection::multi(1, [0, 4]));
}

#[test]
fn test_deselect_one() {
    let mut model = OptionGroupModel::new(mixed_group(), Selection::multi(1, [0, 4]));
    model.toggle_choice(1, 4);
    assert_eq!(model.current_selection(), &Selection::multi(1, [0]));
}

#[test]
fn test_select_one_more_keeps_order() {
    let mut model = OptionGroupModel::new(mixed_group(), Selection::multi(1, [0, 4]));
    model.toggle_choice(1, 2);
    assert_eq!(model.current_selection(), &Selection::multi(1, [0, 2, 4]));
    let chosen: Vec<usize> = model.current_selection().chosen().unwrap().iter().collect();
    assert_eq!(chosen, vec![0, 2, 4]);
}

#[test]
fn test_deselect_all_collapses_to_none() {
    let mut model = OptionGroupModel::new(mixed_group(), Selection::multi(1, [0, 4]));
    model.toggle_choice(1, 0);
    model.toggle_choice(1, 4);
    assert_eq!(model.current_selection(), &Selection::None);
}

#[test]
fn test_plain_then_multi_starts_fresh() {
    let mut model = OptionGroupModel::new(mixed_group(), Selection::single(0));
    model.toggle_choice(1, 2);
    assert_eq!(model.current_selection(), &Selection::multi(1, [2]));
}

#[test]
fn test_multi_then_plain_overwrites() {
    let mut model = OptionGroupModel::new(mixed_group(), Selection::multi(1, [0, 2, 4]));
    model.select_plain_option(0);
    assert_eq!(model.current_selection(), &Selection::single(0));
}

#[test]
fn test_switching_multi_groups_resets() {
    let mut model = OptionGroupModel::new(two_multi_group(), Selection::multi(1, [0, 4]));
    model.toggle_choice(2, 1);
    assert_eq!(model.current_selection(), &Selection::multi(2, [1]));
    model.toggle_choice(1, 4);
    assert_eq!(model.current_selection(), &Selection::multi(1, [4]));
}

// ============================================================================
// Checked Paths
// ============================================================================

#[test]
fn test_try_new_rejects_multi_on_plain_option() {
    let err = OptionGroupModel::try_new(mixed_group(), Selection::multi(0, [1])).unwrap_err();
    assert_eq!(err, GroupError::NotMultipleChoice { index: 0 });
}

#[test]
fn test_try_update_sequence() {
    let mut model = OptionGroupModel::new(two_multi_group(), Selection::None);
    assert_eq!(
        try_update(&mut model, Tap::Choice { option: 2, choice: 0 }),
        Ok(&Selection::multi(2, [0]))
    );
    assert_eq!(
        try_update(&mut model, Tap::Choice { option: 2, choice: 2 }),
        Err(GroupError::ChoiceOutOfRange {
            option: 2,
            choice: 2,
            len: 2
        })
    );
    assert_eq!(model.current_selection(), &Selection::multi(2, [0]));
}

#[test]
#[should_panic]
fn test_update_out_of_range_panics() {
    let mut model = OptionGroupModel::new(plain_group(), Selection::None);
    update(&mut model, Tap::Plain { index: 3 });
}

#[test]
#[should_panic]
fn test_new_with_inconsistent_initial_panics() {
    OptionGroupModel::new(plain_group(), Selection::multi(1, [0]));
}
