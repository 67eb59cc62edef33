use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todo", bin_name = "todo", version)]
#[command(about = "A small todo list that remembers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the todo list (overrides config and TODO_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo at the top of the list
    #[command(alias = "a")]
    Add {
        /// What needs doing
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List todos, most recent first
    #[command(alias = "ls")]
    List {
        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a todo as done, or as not done if it already is
    #[command(alias = "d")]
    Done {
        /// List number or id of the todo
        reference: String,
    },

    /// Replace the text of a todo
    #[command(alias = "e")]
    Edit {
        /// List number or id of the todo
        reference: String,

        /// The new text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete a todo
    #[command(alias = "rm")]
    Delete {
        /// List number or id of the todo
        reference: String,
    },
}
