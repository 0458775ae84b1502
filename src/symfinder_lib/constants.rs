use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

/// The directory containing the experiments files named by the manifest.
pub const EXPERIMENTS_DIR: &str = "experiments";

/// The directory into which project sources are checked out, one
/// subdirectory per experiment.
pub const PROJECTS_DIR: &str = "resources";

/// The script performing git download, checkout, and cleanup of a project.
pub const DOWNLOAD_SCRIPT: &str = "download_project.sh";

/// The script triggering one analysis run.
pub const RERUN_SCRIPT: &str = "rerun.sh";

/// The script regenerating the visualization index files of a project.
pub const VISUALIZATION_SCRIPT: &str = "generate_visualization_files.sh";

/// Where `rerun.sh` puts the graph for a codename, as
/// `{GRAPH_OUTPUT_DIR}/{codename}.json`.
pub const GRAPH_OUTPUT_DIR: &str = "generated_visualizations/data";

/// The environment variable restricting which experiments are processed.
pub const PROJECTS_ENV: &str = "SYMFINDER_PROJECTS";

/// Create a style with a defined foreground color.
pub const fn style_from_fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// The styling for the program name.
pub const PRIMARY_STYLE: Style = style_from_fg(AnsiColor::Green).bold();

/// The styling for error messages.
pub const ERROR_STYLE: Style = style_from_fg(AnsiColor::Red).bold();

/// The styling for help messages.
pub const HELP_STYLE: Style = style_from_fg(AnsiColor::Green).bold().underline();
