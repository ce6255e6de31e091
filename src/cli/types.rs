use clap::Parser;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "til")]
#[command(about = "Today-I-learned notebook: dated Markdown pages, tag pages and an index", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Builds the index and tag pages
    #[arg(short, long, default_value_t = false)]
    pub build: bool,

    /// Lists the configured target directories
    #[arg(short, long, default_value_t = false)]
    pub list: bool,

    /// Builds, saves, and pushes
    #[arg(short, long, default_value_t = false)]
    pub save: bool,

    /// Specifies the target directory key
    #[arg(short, long, value_name = "KEY")]
    pub target: Option<String>,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,

    /// Only print errors; the --list output is still printed
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Title of the new page, or the commit message with --save
    #[arg(value_name = "WORDS", trailing_var_arg = true)]
    pub words: Vec<String>,
}

/// What a single invocation does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Build,
    Save,
    NewPage,
}

impl Cli {
    /// Mode switches are exclusive: list wins over build, build over save
    pub fn mode(&self) -> Mode {
        if self.list {
            Mode::List
        } else if self.build {
            Mode::Build
        } else if self.save {
            Mode::Save
        } else {
            Mode::NewPage
        }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_new_page_words() {
        let cli = parse(&["til", "how", "to", "rust"]);

        assert_eq!(cli.mode(), Mode::NewPage);
        assert_eq!(cli.words, vec!["how", "to", "rust"]);
        assert_eq!(cli.target(), None);
    }

    #[test]
    fn test_save_with_target_and_message() {
        let cli = parse(&["til", "-t", "b", "-s", "this", "is", "test"]);

        assert_eq!(cli.mode(), Mode::Save);
        assert_eq!(cli.target(), Some("b"));
        assert_eq!(cli.words, vec!["this", "is", "test"]);
    }

    #[test]
    fn test_mode_precedence() {
        assert_eq!(parse(&["til", "-s", "-b", "-l"]).mode(), Mode::List);
        assert_eq!(parse(&["til", "--save", "--build"]).mode(), Mode::Build);
    }
}
