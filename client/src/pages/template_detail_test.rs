use super::*;

#[test]
fn builder_paths_by_category() {
    assert_eq!(builder_path(Category::Resume), "/resume-builder");
    assert_eq!(builder_path(Category::Invoice), "/invoice-builder");
    assert_eq!(builder_path(Category::Letter), "/letter-builder");
}

#[test]
fn categories_without_a_builder_fall_back_to_the_ai_writer() {
    assert_eq!(builder_path(Category::Proposal), "/ai-writer");
    assert_eq!(builder_path(Category::Contract), "/ai-writer");
}
