use likert::ui::core::actions::FocusTarget;

#[test]
fn test_focus_cycles_forward() {
    let start = FocusTarget::default();
    assert_eq!(start, FocusTarget::Scale);
    assert_eq!(start.next(), FocusTarget::Comment);
    assert_eq!(start.next().next(), FocusTarget::SubmitButton);
    assert_eq!(start.next().next().next(), FocusTarget::Scale);
}

#[test]
fn test_focus_cycles_backward() {
    assert_eq!(FocusTarget::Scale.previous(), FocusTarget::SubmitButton);
    assert_eq!(FocusTarget::SubmitButton.previous(), FocusTarget::Comment);
    for target in [FocusTarget::Scale, FocusTarget::Comment, FocusTarget::SubmitButton] {
        assert_eq!(target.next().previous(), target);
    }
}
