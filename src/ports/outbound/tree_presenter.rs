use crate::dependency_tree::domain::DependencyTree;

/// TreePresenter port turning a (filtered) tree into displayable text
pub trait TreePresenter {
    fn render(&self, tree: &DependencyTree) -> String;
}
