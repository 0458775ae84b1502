use anstyle::AnsiColor;
use clap::crate_name;
use clap::crate_version;
use symfinder_lib::constants::style_from_fg;
use symfinder_lib::constants::ERROR_STYLE;
use symfinder_lib::constants::HELP_STYLE;
use symfinder_lib::constants::PRIMARY_STYLE;

/// Util function for getting the style for the CLI.
pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(style_from_fg(AnsiColor::Yellow).bold())
        .header(style_from_fg(AnsiColor::Green).bold().underline())
        .literal(style_from_fg(AnsiColor::Cyan).bold())
        .invalid(style_from_fg(AnsiColor::Blue).bold())
        .error(ERROR_STYLE)
        .valid(HELP_STYLE)
        .placeholder(style_from_fg(AnsiColor::White))
}

/// Pretty print the version.
pub fn print_version() {
    println!(
        "{}{}{:#} at version {}",
        PRIMARY_STYLE,
        crate_name!(),
        PRIMARY_STYLE,
        crate_version!()
    );
}
