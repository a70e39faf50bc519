use clap::{Parser, Subcommand};
use studybuddy_client::LayoutVariant;
use studybuddy_common::EducationLevel;

#[derive(Parser)]
#[command(name = "studybuddy", version, about = "AI Study Buddy command-line client")]
pub(crate) struct Cli {
    /// Configuration file (defaults to ./studybuddy.toml when present)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Log in and store the session
    Login {
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// e.g. high_school, university
        #[arg(long)]
        education_level: Option<EducationLevel>,
    },

    /// Forget the stored session
    Logout,

    /// Render a page with the application layout
    Page {
        /// Page path, e.g. /quiz.html
        path: String,
        #[arg(long, default_value = "")]
        title: String,
        /// Navigation entry to highlight (derived from the path when omitted)
        #[arg(long)]
        active: Option<String>,
        #[arg(long)]
        no_footer: bool,
        #[arg(long)]
        variant: Option<LayoutVariant>,
    },

    /// Show the current user's gamification stats
    Stats,

    /// Check the stored token against the server
    Verify,
}
