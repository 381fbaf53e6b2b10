//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use service::domain::{
    course,
    employee::{self, EmployerName},
};

/// Command line tool managing employees of the organization.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// [`Command`] to run.
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Operation to perform.
#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Creates a new employee.
    Create {
        /// First name of the employee.
        first_name: employee::Name,

        /// Last name of the employee.
        last_name: employee::Name,

        /// Name of the employer of an external employee.
        #[arg(long)]
        employer: Option<EmployerName>,

        /// Creates an external employee instead of an internal one.
        #[arg(long)]
        external: bool,
    },

    /// Fetches a single internal employee, or all of them if no ID is
    /// provided.
    Fetch {
        /// ID of the internal employee.
        id: Option<employee::Id>,
    },

    /// Promotes an internal employee, if eligible.
    Promote {
        /// ID of the internal employee.
        id: employee::Id,
    },

    /// Raises a salary of an internal employee.
    Raise {
        /// ID of the internal employee.
        id: employee::Id,

        /// Amount to raise the salary by.
        amount: Decimal,
    },

    /// Records a course attended by an internal employee.
    Attend {
        /// ID of the internal employee.
        id: employee::Id,

        /// ID of the attended course.
        course_id: course::Id,
    },

    /// Reports an internal employee being absent.
    Absent {
        /// ID of the internal employee.
        id: employee::Id,
    },
}

#[cfg(test)]
mod spec {
    use clap::Parser as _;

    use super::{Args, Command};

    #[test]
    fn parses_create_external() {
        let args = Args::try_parse_from([
            "application",
            "create",
            "Amanda",
            "Smith",
            "--employer",
            "IT for Everyone, Inc",
            "--external",
        ])
        .unwrap();

        assert_eq!(args.config, "config.toml");
        let Command::Create {
            first_name,
            employer,
            external,
            ..
        } = args.command
        else {
            panic!("`create` expected");
        };
        assert_eq!(first_name.as_ref(), "Amanda");
        assert_eq!(employer.unwrap().as_ref(), "IT for Everyone, Inc");
        assert!(external);
    }

    #[test]
    fn parses_fetch_with_and_without_id() {
        let all = Args::try_parse_from(["application", "fetch"]).unwrap();
        assert!(matches!(all.command, Command::Fetch { id: None }));

        let one = Args::try_parse_from([
            "application",
            "-c",
            "local.toml",
            "fetch",
            "72f2f5fe-e50c-4966-8420-d50258aefdcb",
        ])
        .unwrap();
        assert_eq!(one.config, "local.toml");
        assert!(matches!(one.command, Command::Fetch { id: Some(_) }));
    }

    #[test]
    fn parses_raise_amount() {
        let args = Args::try_parse_from([
            "application",
            "raise",
            "72f2f5fe-e50c-4966-8420-d50258aefdcb",
            "150.50",
        ])
        .unwrap();

        let Command::Raise { amount, .. } = args.command else {
            panic!("`raise` expected");
        };
        assert_eq!(amount.to_string(), "150.50");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(Args::try_parse_from(["application", "promote", "42"]).is_err());
        assert!(Args::try_parse_from([
            "application",
            "raise",
            "72f2f5fe-e50c-4966-8420-d50258aefdcb",
            "lots",
        ])
        .is_err());
        assert!(
            Args::try_parse_from(["application", "create", " ", "Smith"])
                .is_err(),
        );
    }
}
