//! mep-project: canonical project file format, validation, and compilation.
//!
//! The project file is the stand-in for the host application's element
//! model: it enumerates candidate networks with their elements and named
//! connector attachments. Loading validates references, and
//! [`compile_network`] freezes each definition into an immutable
//! [`mep_model::Network`].

pub mod compile;
pub mod eligibility;
pub mod schema;
pub mod validate;

pub use compile::compile_network;
pub use eligibility::{Disqualification, MIN_ELEMENTS, disqualification};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_project};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Model error: {0}")]
    Model(#[from] mep_core::MepError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Load and validate a project file.
pub fn load_project(path: &std::path::Path) -> ProjectResult<Project> {
    let content = std::fs::read_to_string(path)?;
    let project: Project = serde_yaml::from_str(&content)?;
    validate_project(&project)?;
    Ok(project)
}

/// Persist a project file (used by tooling and test fixtures).
pub fn save_project(path: &std::path::Path, project: &Project) -> ProjectResult<()> {
    validate_project(project)?;
    let content = serde_yaml::to_string(project)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
version: 1
name: Office Tower
orientation: bottom_up
networks:
  - uid: 100
    name: Supply Air
    category: mechanical
    root: AHU-1
    elements:
      - { id: 1, name: AHU-1, kind: equipment }
      - { id: 2, name: Duct-1, kind: segment }
    connectors:
      - { from: AHU-1, from_port: Out1, to: Duct-1, to_port: In }
"#;

    #[test]
    fn parse_sample_yaml() {
        let project: Project = serde_yaml::from_str(SAMPLE).unwrap();
        validate_project(&project).unwrap();
        assert_eq!(project.name, "Office Tower");
        assert_eq!(project.orientation, mep_core::Orientation::BottomUp);
        assert_eq!(project.networks.len(), 1);
        assert_eq!(project.networks[0].elements[1].name, "Duct-1");
    }

    #[test]
    fn orientation_defaults_to_top_down() {
        let yaml = "version: 1\nname: T\nnetworks: []\n";
        let project: Project = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(project.orientation, mep_core::Orientation::TopDown);
    }

    #[test]
    fn round_trip_through_file() {
        let project: Project = serde_yaml::from_str(SAMPLE).unwrap();
        let dir = std::env::temp_dir().join("mep-project-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("project.yaml");
        save_project(&path, &project).unwrap();
        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded, project);
    }
}
