//! StorySmith CLI - generate one story from the command line.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use storysmith_domain::{
    is_catalog_theme, CreativityLevel, GeneratedStory, ReadingEstimate, StoryRequest,
    ValidationError, DEFAULT_STORY_LENGTH,
};
use storysmith_engine::infrastructure::config::{load_dotenv, ProviderConfig};
use storysmith_engine::infrastructure::telemetry::init_tracing;
use storysmith_engine::use_cases::StoryError;
use storysmith_engine::App;

#[derive(Debug, Parser)]
#[command(name = "storysmith")]
#[command(about = "Generate a short story from a character description")]
#[command(version)]
struct Cli {
    /// Character name
    #[arg(long)]
    name: String,

    /// Character type (e.g. Cat, Robot, Wizard)
    #[arg(long = "type")]
    char_type: String,

    /// Character personality
    #[arg(long)]
    persona: String,

    /// Where the story takes place
    #[arg(long)]
    location: String,

    /// Approximate number of sentences
    #[arg(long, default_value_t = DEFAULT_STORY_LENGTH)]
    length: u32,

    /// Story theme; repeat for several
    #[arg(long = "theme")]
    themes: Vec<String>,

    /// very-low, low, medium, high or very-high
    #[arg(long, default_value = "medium", conflicts_with = "temperature")]
    creativity: CreativityLevel,

    /// Exact sampling temperature, overriding --creativity
    #[arg(long)]
    temperature: Option<f64>,

    /// Write the story export to this path
    #[arg(long, conflicts_with = "save")]
    output: Option<PathBuf>,

    /// Write the story export to its default file name
    #[arg(long)]
    save: bool,
}

impl Cli {
    fn story_request(&self) -> StoryRequest {
        let temperature = self
            .temperature
            .unwrap_or_else(|| self.creativity.temperature());

        StoryRequest::new(
            &self.name,
            &self.char_type,
            &self.persona,
            &self.location,
            self.length,
            self.themes.clone(),
        )
        .with_temperature(temperature)
    }

    fn export_path(&self, story: &GeneratedStory) -> Option<PathBuf> {
        match (&self.output, self.save) {
            (Some(path), _) => Some(path.clone()),
            (None, true) => Some(PathBuf::from(story.export_file_name())),
            (None, false) => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Invalid(_) => ExitCode::from(2),
            CliError::Failed(_) => ExitCode::FAILURE,
        }
    }
}

impl From<StoryError> for CliError {
    fn from(e: StoryError) -> Self {
        match e {
            StoryError::Validation(e) => CliError::Invalid(e),
            StoryError::ExternalService(_) => {
                CliError::Failed(anyhow::Error::new(e).context("Story generation failed"))
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    load_dotenv();
    init_tracing("storysmith_engine=warn");

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            e.exit_code()
        }
    }
}

async fn run(cli: &Cli) -> Result<(), CliError> {
    let request = cli.story_request();

    // Input problems are reported before any credential is needed.
    request.validate()?;

    for theme in cli.themes.iter().filter(|t| !is_catalog_theme(t)) {
        tracing::warn!(theme = %theme, "Theme is not in the catalog; using it as given");
    }

    let config = ProviderConfig::from_env().context("Failed to load provider configuration")?;
    let app = App::with_provider_config(&config);

    let estimate = ReadingEstimate::for_sentences(request.story_length);
    eprintln!(
        "Generating ~{} words (about {} min read) with {} at temperature {}...",
        estimate.words, estimate.minutes, config.model, request.temperature
    );

    let story = app.use_cases.story.generate.execute(request).await?;
    println!("{}", story.response);

    if let Some(path) = cli.export_path(&story) {
        write_export(&story, &path)?;
        eprintln!("Saved to {}", path.display());
    }

    Ok(())
}

fn write_export(story: &GeneratedStory, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, story.export_text())
        .with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storysmith_domain::{Premises, StoryMetadata};

    const BASE: [&str; 9] = [
        "storysmith",
        "--name",
        "Mitten",
        "--type",
        "Cat",
        "--persona",
        "Friendly, curious",
        "--location",
        "Andromeda Galaxy",
    ];

    fn parse(extra: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(BASE.iter().chain(extra).copied())
    }

    fn story() -> GeneratedStory {
        let request = parse(&["--theme", "Love"]).unwrap().story_request();
        GeneratedStory::new("Once upon a time...", StoryMetadata::from_request(&request))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--theme", "Love"]).unwrap();
        let request = cli.story_request();

        assert_eq!(request.story_length, 50);
        assert_eq!(request.temperature, 0.6);
        assert_eq!(request.story_premise, Premises::Many(vec!["Love".to_string()]));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_repeated_themes_and_creativity() {
        let cli = parse(&[
            "--theme",
            "Love",
            "--theme",
            "Adventure",
            "--creativity",
            "very-high",
            "--length",
            "120",
        ])
        .unwrap();
        let request = cli.story_request();

        assert_eq!(request.story_premise.joined(), "Love, Adventure");
        assert_eq!(request.temperature, 0.95);
        assert_eq!(request.story_length, 120);
    }

    #[test]
    fn test_explicit_temperature() {
        let request = parse(&["--theme", "Love", "--temperature", "0.3"])
            .unwrap()
            .story_request();
        assert_eq!(request.temperature, 0.3);
    }

    #[test]
    fn test_temperature_conflicts_with_creativity() {
        assert!(parse(&["--creativity", "low", "--temperature", "0.3"]).is_err());
    }

    #[test]
    fn test_unknown_creativity_is_rejected() {
        assert!(parse(&["--creativity", "wild"]).is_err());
    }

    #[test]
    fn test_missing_theme_fails_validation() {
        let request = parse(&[]).unwrap().story_request();
        assert_eq!(request.validate(), Err(ValidationError::NoPremises));
    }

    #[tokio::test]
    async fn test_invalid_request_exits_with_two() {
        let cli = parse(&["--theme", "Love", "--length", "5"]).unwrap();
        let err = run(&cli).await.unwrap_err();

        assert!(matches!(
            err,
            CliError::Invalid(ValidationError::LengthOutOfRange { value: 5, .. })
        ));
        assert_eq!(err.exit_code(), ExitCode::from(2));
    }

    #[test]
    fn test_provider_failure_exits_with_one() {
        let err = CliError::from(StoryError::ExternalService(
            storysmith_engine::infrastructure::ports::LlmError::RequestFailed("timeout".into()),
        ));
        assert_eq!(err.exit_code(), ExitCode::FAILURE);
        assert!(format!("{err:#}").contains("timeout"));
    }

    #[test]
    fn test_export_path() {
        let story = story();

        let cli = parse(&["--save"]).unwrap();
        assert_eq!(
            cli.export_path(&story),
            Some(PathBuf::from("story_mitten.txt"))
        );

        let cli = parse(&["--output", "out/tale.txt"]).unwrap();
        assert_eq!(cli.export_path(&story), Some(PathBuf::from("out/tale.txt")));

        assert_eq!(parse(&[]).unwrap().export_path(&story), None);
        assert!(parse(&["--save", "--output", "x.txt"]).is_err());
    }

    #[test]
    fn test_write_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("story.txt");

        write_export(&story(), &path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Title: Story of Mitten\n\nOnce upon a time..."
        );
    }

    #[test]
    fn test_write_export_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("story.txt");

        let err = write_export(&story(), &path).unwrap_err();
        assert!(err.to_string().contains("story.txt"));
    }
}
