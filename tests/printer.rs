use annota::{annotate, interpreter::printer::render};
use indoc::indoc;
use pretty_assertions::assert_eq;

#[test]
fn display_uses_seven_space_indent() {
    let tree = annotate("(3+4)*2").unwrap();
    let expected = indoc! {"
        * (term -> term * fac : 7 * 2 = 14)
               + (exp -> exp + term : 3 + 4 = 7)
                      3 (comp -> num : 3)
                      4 (comp -> num : 4)
               2 (comp -> num : 2)
    "};
    assert_eq!(tree.to_string(), expected);
}

#[test]
fn render_honours_custom_indent() {
    let tree = annotate("1-2^3").unwrap();
    let expected = indoc! {"
        - (exp -> exp - term : 1 - 8 = -7)
          1 (comp -> num : 1)
          ^ (fac -> fac ^ comp : 2 ^ 3 = 8)
            2 (comp -> num : 2)
            3 (comp -> num : 3)
    "};
    assert_eq!(render(&tree, 2), expected);
}

#[test]
fn render_without_indent_lists_nodes_in_pre_order() {
    let tree = annotate("8/4%3").unwrap();
    let expected = indoc! {"
        % (term -> term % fac : 2 % 3 = 2)
        / (term -> term / fac : 8 / 4 = 2)
        8 (comp -> num : 8)
        4 (comp -> num : 4)
        3 (comp -> num : 3)
    "};
    assert_eq!(render(&tree, 0), expected);
}

#[test]
fn single_constant_renders_one_line() {
    let tree = annotate("42").unwrap();
    assert_eq!(render(&tree, 7), "42 (comp -> num : 42)\n");
}
