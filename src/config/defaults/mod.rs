/// Commit message used when neither the command line nor the config has one
pub const DEFAULT_COMMIT_MESSAGE: &str = "build, save, push";

/// Editor used when the config leaves `editor` blank
pub const DEFAULT_EDITOR: &str = "open";

/// Written to a freshly created, empty configuration file
pub const DEFAULT_CONFIG: &str = r#"---
commitMessage: "build, save, push"
committerEmail: test@example.com
committerName: "TIL Autobot"
editor: ""
targetDirectories:
  a: "~/Documents/tilblog"
"#;
