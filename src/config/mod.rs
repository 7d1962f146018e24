//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! company salary structure and attendance policy from YAML files.

use std::fs;
use std::path::Path;

use crate::attendance::AttendancePolicy;
use crate::error::{DayflowError, DayflowResult};
use crate::models::CompanyStructure;
use crate::payroll::validate_structure;

/// Loads and provides access to company configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and validates the salary structure before handing it out.
///
/// # Directory Structure
///
/// ```text
/// config/dayflow/
/// ├── structure.yaml   # Company-wide salary structure
/// └── policy.yaml      # Attendance thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use dayflow_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/dayflow").unwrap();
/// let structure = loader.structure();
/// println!("Monthly wage: {}", structure.month_wage);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    structure: CompanyStructure,
    policy: AttendancePolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error when either file is missing, fails to parse, or
    /// the structure carries negative amounts or an impossible
    /// working-day count.
    ///
    /// ```no_run
    /// use dayflow_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/dayflow")?;
    /// # Ok::<(), dayflow_engine::error::DayflowError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> DayflowResult<Self> {
        let path = path.as_ref();

        let structure_path = path.join("structure.yaml");
        let structure = Self::load_yaml::<CompanyStructure>(&structure_path)?;
        validate_structure(&structure)?;

        let policy_path = path.join("policy.yaml");
        let policy = Self::load_yaml::<AttendancePolicy>(&policy_path)?;

        Ok(Self { structure, policy })
    }

    /// The company-wide salary structure.
    pub fn structure(&self) -> &CompanyStructure {
        &self.structure
    }

    /// The attendance policy thresholds.
    pub fn policy(&self) -> AttendancePolicy {
        self.policy
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> DayflowResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DayflowError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| DayflowError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use rust_decimal::Decimal;

    fn write_valid_config(dir: &Path) {
        let structure = r#"
month_wage: "50000"
yearly_wage: "600000"
working_days: 5
break_time_hours: "1"
components:
  - name: Basic Salary
    amount: "25000"
    description: Half of monthly wage
  - name: House Rent Allowance
    amount: "12500"
    description: Half of basic salary
    percentage: "50.00%"
pf_contribution:
  employee:
    amount: "3000"
    percentage: "12.00%"
  employer:
    amount: "3000"
    percentage: "12.00%"
professional_tax: "200"
"#;
        let policy = "standard_shift_minutes: 480\nlate_threshold_hour: 9\n";
        fs::write(dir.join("structure.yaml"), structure).unwrap();
        fs::write(dir.join("policy.yaml"), policy).unwrap();
    }

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("dayflow-config-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    // CFG-001: A well-formed directory loads both files.
    #[test]
    fn test_cfg_001_load_valid_directory() {
        let dir = temp_dir("valid");
        write_valid_config(&dir);

        let loader = ConfigLoader::load(&dir).unwrap();
        assert_eq!(
            loader.structure().month_wage,
            Decimal::from_str("50000").unwrap()
        );
        assert_eq!(loader.structure().components.len(), 2);
        assert_eq!(loader.policy().late_threshold_hour, 9);

        fs::remove_dir_all(&dir).unwrap();
    }

    // CFG-002: A missing directory reports ConfigNotFound.
    #[test]
    fn test_cfg_002_missing_file_is_not_found() {
        let err = ConfigLoader::load("/nonexistent/dayflow").unwrap_err();
        assert!(matches!(err, DayflowError::ConfigNotFound { .. }));
    }

    // CFG-003: Malformed YAML reports a parse error with the path.
    #[test]
    fn test_cfg_003_malformed_yaml_is_parse_error() {
        let dir = temp_dir("malformed");
        write_valid_config(&dir);
        fs::write(dir.join("structure.yaml"), "month_wage: [not, a, wage").unwrap();

        let err = ConfigLoader::load(&dir).unwrap_err();
        match err {
            DayflowError::ConfigParseError { path, .. } => {
                assert!(path.ends_with("structure.yaml"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    // CFG-004: A structure with negative amounts fails validation at load.
    #[test]
    fn test_cfg_004_negative_structure_rejected() {
        let dir = temp_dir("negative");
        write_valid_config(&dir);
        let structure = fs::read_to_string(dir.join("structure.yaml"))
            .unwrap()
            .replace("professional_tax: \"200\"", "professional_tax: \"-200\"");
        fs::write(dir.join("structure.yaml"), structure).unwrap();

        let err = ConfigLoader::load(&dir).unwrap_err();
        assert!(matches!(err, DayflowError::NegativeAmount { .. }));

        fs::remove_dir_all(&dir).unwrap();
    }
}
