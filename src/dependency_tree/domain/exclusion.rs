use super::{ComponentId, DescriptorLocation, Ecosystem};
use std::fmt;

/// Exclusion syntax understood by a descriptor format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionSyntax {
    /// `<exclusions><exclusion>` block inside a Maven `<dependency>`
    MavenExclusion,
    /// `exclude group:, module:` inside a Gradle dependency closure
    GradleExclude,
}

impl Ecosystem {
    /// Exclusion syntax supported by descriptors of this ecosystem, if any
    pub fn exclusion_syntax(&self) -> Option<ExclusionSyntax> {
        match self {
            Ecosystem::Maven => Some(ExclusionSyntax::MavenExclusion),
            Ecosystem::Gradle => Some(ExclusionSyntax::GradleExclude),
            Ecosystem::Npm | Ecosystem::Go | Ecosystem::Pypi | Ecosystem::Other => None,
        }
    }
}

impl ExclusionSyntax {
    /// Renders the exclusion of `target` in this syntax.
    ///
    /// Maven coordinates are `group:artifact`; a name without a group is
    /// excluded with the `*` group wildcard.
    pub fn render(&self, target: &ComponentId) -> String {
        let (group, artifact) = match target.name().split_once(':') {
            Some((group, artifact)) => (Some(group), artifact),
            None => (None, target.name()),
        };

        match self {
            ExclusionSyntax::MavenExclusion => format!(
                "<exclusion><groupId>{}</groupId><artifactId>{}</artifactId></exclusion>",
                group.unwrap_or("*"),
                artifact
            ),
            ExclusionSyntax::GradleExclude => match group {
                Some(group) => format!("exclude group: '{}', module: '{}'", group, artifact),
                None => format!("exclude module: '{}'", artifact),
            },
        }
    }
}

impl fmt::Display for ExclusionSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionSyntax::MavenExclusion => write!(f, "maven exclusion"),
            ExclusionSyntax::GradleExclude => write!(f, "gradle exclude"),
        }
    }
}

/// Everything the descriptor edit backend needs to exclude `target`
/// from under the direct dependency `anchor`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExclusionAction {
    target: ComponentId,
    anchor: ComponentId,
    descriptor_location: DescriptorLocation,
    syntax: ExclusionSyntax,
}

impl ExclusionAction {
    pub fn new(
        target: ComponentId,
        anchor: ComponentId,
        descriptor_location: DescriptorLocation,
        syntax: ExclusionSyntax,
    ) -> Self {
        Self {
            target,
            anchor,
            descriptor_location,
            syntax,
        }
    }

    pub fn target(&self) -> &ComponentId {
        &self.target
    }

    pub fn anchor(&self) -> &ComponentId {
        &self.anchor
    }

    pub fn descriptor_location(&self) -> &DescriptorLocation {
        &self.descriptor_location
    }

    pub fn syntax(&self) -> ExclusionSyntax {
        self.syntax
    }

    pub fn snippet(&self) -> String {
        self.syntax.render(&self.target)
    }
}
