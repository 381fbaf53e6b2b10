//! Promotion definitions.

use serde::{Deserialize, Serialize};

use crate::domain::employee::{self, JobLevel};
#[cfg(doc)]
use crate::domain::employee::Internal;

/// Eligibility of an [`Internal`] employee for a promotion, as reported by
/// the promotion eligibility endpoint.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Eligibility {
    /// Indicator whether the employee may be promoted right now.
    pub eligible_for_promotion: bool,
}

/// Outcome of a single promotion attempt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Employee was promoted and the new [`JobLevel`] is stored.
    Promoted {
        /// ID of the promoted employee.
        employee_id: employee::Id,

        /// [`JobLevel`] after the promotion.
        job_level: JobLevel,
    },

    /// Employee is not eligible for a promotion and was left untouched.
    NotEligible {
        /// ID of the employee.
        employee_id: employee::Id,
    },
}

impl Outcome {
    /// Returns ID of the employee this [`Outcome`] is about.
    #[must_use]
    pub fn employee_id(&self) -> employee::Id {
        match self {
            Self::Promoted { employee_id, .. }
            | Self::NotEligible { employee_id } => *employee_id,
        }
    }

    /// Returns the new [`JobLevel`], if a promotion happened.
    #[must_use]
    pub fn job_level(&self) -> Option<JobLevel> {
        match self {
            Self::Promoted { job_level, .. } => Some(*job_level),
            Self::NotEligible { .. } => None,
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Eligibility;

    #[test]
    fn eligibility_uses_camel_case() {
        let parsed: Eligibility =
            serde_json::from_str(r#"{"eligibleForPromotion":true}"#).unwrap();
        assert!(parsed.eligible_for_promotion);

        assert_eq!(
            serde_json::to_string(&Eligibility {
                eligible_for_promotion: false,
            })
            .unwrap(),
            r#"{"eligibleForPromotion":false}"#,
        );

        assert!(serde_json::from_str::<Eligibility>(
            r#"{"eligible_for_promotion":true}"#,
        )
        .is_err());
    }
}
