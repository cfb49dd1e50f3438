use indexmap::IndexMap;

pub const REQUIREMENTS_TXT: &str = "\
torch
torchvision
pytorch-lightning
black
isort
pre-commit
";

pub const PRE_COMMIT_CONFIG_YAML: &str = "\
repos:
  - repo: https://github.com/psf/black
    rev: 24.3.0
    hooks:
      - id: black

  - repo: https://github.com/PyCQA/isort
    rev: 5.12.0
    hooks:
      - id: isort
";

pub const PYPROJECT_TOML: &str = r#"[tool.black]
line-length = 88
target-version = ['py311']

[tool.isort]
profile = "black"
"#;

/// The fixed set of files the tool knows how to write, keyed by their
/// relative path. Insertion order is the order files are shown and
/// written.
#[derive(Debug, Clone)]
pub struct Manifest(pub IndexMap<&'static str, &'static str>); // https://www.howtocodeit.com/articles/ultimate-guide-rust-newtypes
impl Manifest {
    pub fn standard() -> Self {
        let mut files = IndexMap::new();

        files.insert("requirements.txt", REQUIREMENTS_TXT);
        files.insert(".pre-commit-config.yaml", PRE_COMMIT_CONFIG_YAML);
        files.insert("pyproject.toml", PYPROJECT_TOML);

        Manifest(files)
    }
}
