use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "Track, add, and search your book collection", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding books.json (defaults to $SHELF_HOME or the user data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new book
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Book title
        title: String,

        /// Author
        #[arg(short, long)]
        author: String,

        /// One of: Fiction, Non-Fiction, Mystery, Sci-Fi, Other
        #[arg(short, long, default_value = "Fiction")]
        genre: String,

        /// Rating from 1 to 5
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        rating: i64,
    },

    /// Show your book collection
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only show books whose title or author contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search by title or author (case-insensitive)
    #[command(alias = "s", display_order = 3)]
    Search {
        /// Words to look for (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Remove every book with exactly this title
    #[command(alias = "rm", display_order = 4)]
    Remove {
        /// Exact title, case-sensitive (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
    },

    /// List the titles in the collection
    #[command(display_order = 5)]
    Titles,

    /// Show genre and rating charts
    #[command(display_order = 6)]
    Stats,

    /// Export the collection as JSON
    #[command(display_order = 7)]
    Export {
        /// Where to write (defaults to the configured export file in the current directory)
        #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Get or set configuration
    #[command(display_order = 8)]
    Config {
        /// Configuration key (data-file, export-file, chart-width)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory and an empty store
    #[command(display_order = 9)]
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_defaults_match_the_form() {
        let cli = Cli::try_parse_from(["shelf", "add", "Dune", "--author", "Herbert"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                title,
                author,
                genre,
                rating,
            }) => {
                assert_eq!(title, "Dune");
                assert_eq!(author, "Herbert");
                assert_eq!(genre, "Fiction");
                assert_eq!(rating, 1);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn remove_joins_title_words() {
        let cli = Cli::try_parse_from(["shelf", "rm", "The", "Hobbit"]).unwrap();
        match cli.command {
            Some(Commands::Remove { title }) => assert_eq!(title.join(" "), "The Hobbit"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["shelf", "list", "--data-dir", "/tmp/x", "-v"]).unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.verbose);
    }

    #[test]
    fn export_output_and_stdout_conflict() {
        assert!(Cli::try_parse_from(["shelf", "export", "-o", "a.json", "--stdout"]).is_err());
    }

    #[test]
    fn add_requires_author() {
        assert!(Cli::try_parse_from(["shelf", "add", "Dune"]).is_err());
    }
}
