//! Dork options and the query templates they select.

use std::fmt;
use std::str::FromStr;

use crate::error::DorkError;

/// A numbered query template selected by the first command-line argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DorkOption {
    InTitle,
    InUrl,
    Site,
    FileType,
    InText,
    Combined,
    KnownVulnerabilities,
    TargetedSite,
    Advanced,
    ConfigFiles,
    DatabaseFiles,
    BackupFiles,
    GitFolder,
    ExposedDocuments,
    SqlErrors,
    PhpErrors,
    LoginPages,
    OpenRedirects,
    ApacheStrutsRce,
    WordpressFiles,
    OtherFiles,
    LinkedinEmployees,
    AwsS3Buckets,
    Azure,
    GoogleCloud,
}

/// How a dork option turns its free-text arguments into a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    /// `<operator>:<args joined>`
    Operator(&'static str),
    /// The arguments joined verbatim
    Verbatim,
    /// `site:<first arg> <remaining args joined>`, needs at least two args
    TargetedSite,
    /// The arguments joined verbatim, needs at least one arg
    Advanced,
    /// A fixed query that ignores the arguments
    Canned(&'static str),
}

impl DorkOption {
    /// All options in menu order
    pub const ALL: [DorkOption; 25] = [
        DorkOption::InTitle,
        DorkOption::InUrl,
        DorkOption::Site,
        DorkOption::FileType,
        DorkOption::InText,
        DorkOption::Combined,
        DorkOption::KnownVulnerabilities,
        DorkOption::TargetedSite,
        DorkOption::Advanced,
        DorkOption::ConfigFiles,
        DorkOption::DatabaseFiles,
        DorkOption::BackupFiles,
        DorkOption::GitFolder,
        DorkOption::ExposedDocuments,
        DorkOption::SqlErrors,
        DorkOption::PhpErrors,
        DorkOption::LoginPages,
        DorkOption::OpenRedirects,
        DorkOption::ApacheStrutsRce,
        DorkOption::WordpressFiles,
        DorkOption::OtherFiles,
        DorkOption::LinkedinEmployees,
        DorkOption::AwsS3Buckets,
        DorkOption::Azure,
        DorkOption::GoogleCloud,
    ];

    /// The menu number of this option (1-based)
    pub fn number(self) -> u8 {
        match self {
            DorkOption::InTitle => 1,
            DorkOption::InUrl => 2,
            DorkOption::Site => 3,
            DorkOption::FileType => 4,
            DorkOption::InText => 5,
            DorkOption::Combined => 6,
            DorkOption::KnownVulnerabilities => 7,
            DorkOption::TargetedSite => 8,
            DorkOption::Advanced => 9,
            DorkOption::ConfigFiles => 10,
            DorkOption::DatabaseFiles => 11,
            DorkOption::BackupFiles => 12,
            DorkOption::GitFolder => 13,
            DorkOption::ExposedDocuments => 14,
            DorkOption::SqlErrors => 15,
            DorkOption::PhpErrors => 16,
            DorkOption::LoginPages => 17,
            DorkOption::OpenRedirects => 18,
            DorkOption::ApacheStrutsRce => 19,
            DorkOption::WordpressFiles => 20,
            DorkOption::OtherFiles => 21,
            DorkOption::LinkedinEmployees => 22,
            DorkOption::AwsS3Buckets => 23,
            DorkOption::Azure => 24,
            DorkOption::GoogleCloud => 25,
        }
    }

    /// Human-readable description used in the option listing
    pub fn description(self) -> &'static str {
        match self {
            DorkOption::InTitle => "Search in titles (intitle)",
            DorkOption::InUrl => "Search in URLs (inurl)",
            DorkOption::Site => "Search in a specific site (site)",
            DorkOption::FileType => "Search for a specific file type (filetype)",
            DorkOption::InText => "Search for specific text in the page (intext)",
            DorkOption::Combined => "Combine multiple options",
            DorkOption::KnownVulnerabilities => "Search for known vulnerabilities",
            DorkOption::TargetedSite => {
                "Custom targeted search (site:[TARGET] inurl:_cpanel/forgotpwd, etc.)"
            }
            DorkOption::Advanced => {
                "Advanced Google Dorking (inurl:\"/admin/login\" intitle:\"login\")"
            }
            DorkOption::ConfigFiles => "Search for Config files",
            DorkOption::DatabaseFiles => "Search for Database files",
            DorkOption::BackupFiles => "Search for Backup files",
            DorkOption::GitFolder => "Search for .git folder",
            DorkOption::ExposedDocuments => "Search for Exposed documents",
            DorkOption::SqlErrors => "Search for SQL errors",
            DorkOption::PhpErrors => "Search for PHP errors",
            DorkOption::LoginPages => "Search for Login pages",
            DorkOption::OpenRedirects => "Search for Open redirects",
            DorkOption::ApacheStrutsRce => "Search for Apache Struts RCE",
            DorkOption::WordpressFiles => "Search for Wordpress files",
            DorkOption::OtherFiles => "Search for Other files",
            DorkOption::LinkedinEmployees => "Search for Linkedin employees",
            DorkOption::AwsS3Buckets => "Search for AWS S3 Buckets",
            DorkOption::Azure => "Search for Azure",
            DorkOption::GoogleCloud => "Search for Google Cloud",
        }
    }

    /// The template this option expands
    pub fn template(self) -> Template {
        match self {
            DorkOption::InTitle => Template::Operator("intitle"),
            DorkOption::InUrl => Template::Operator("inurl"),
            DorkOption::Site => Template::Operator("site"),
            DorkOption::FileType => Template::Operator("filetype"),
            DorkOption::InText => Template::Operator("intext"),
            DorkOption::Combined => Template::Verbatim,
            DorkOption::KnownVulnerabilities => Template::Canned("known vulnerabilities"),
            DorkOption::TargetedSite => Template::TargetedSite,
            DorkOption::Advanced => Template::Advanced,
            DorkOption::ConfigFiles => {
                Template::Canned("filetype:ini OR filetype:env OR filetype:config")
            }
            DorkOption::DatabaseFiles => Template::Canned("filetype:sql OR filetype:db"),
            DorkOption::BackupFiles => Template::Canned(
                "filetype:bkf OR filetype:bkp OR filetype:bak OR filetype:old OR filetype:backup",
            ),
            DorkOption::GitFolder => Template::Canned("inurl:.git"),
            DorkOption::ExposedDocuments => Template::Canned(
                "filetype:doc OR filetype:docx OR filetype:ppt OR filetype:pptx OR filetype:xls OR filetype:xlsx OR filetype:pdf",
            ),
            DorkOption::SqlErrors => Template::Canned(
                "intext:\"SQL syntax error\" OR intext:\"Warning: mysql_connect()\" OR intext:\"Warning: mysqli_connect()\"",
            ),
            DorkOption::PhpErrors => Template::Canned(
                "intext:\"Parse error\" OR intext:\"Fatal error\" OR intext:\"Warning: include\" OR intext:\"Warning: require\"",
            ),
            DorkOption::LoginPages => {
                Template::Canned("inurl:login OR inurl:signin OR intitle:login")
            }
            DorkOption::OpenRedirects => Template::Canned("inurl:redir OR inurl:redirect"),
            DorkOption::ApacheStrutsRce => {
                Template::Canned("intitle:\"Apache Struts Default User Interface\"")
            }
            DorkOption::WordpressFiles => Template::Canned(
                "filetype:wpd OR filetype:wps OR filetype:wpa OR filetype:wpb OR filetype:wpf OR filetype:wpg OR filetype:wpp OR filetype:wpt OR filetype:wpw",
            ),
            DorkOption::OtherFiles => Template::Canned(
                "filetype:log OR filetype:lst OR filetype:pwd OR filetype:sql OR filetype:conf OR filetype:inc OR filetype:ini OR filetype:bkf OR filetype:bkp OR filetype:bak OR filetype:old OR filetype:backup",
            ),
            DorkOption::LinkedinEmployees => Template::Canned("site:linkedin.com employee"),
            DorkOption::AwsS3Buckets => Template::Canned("site:s3.amazonaws.com"),
            DorkOption::Azure => Template::Canned("site:azure.com"),
            DorkOption::GoogleCloud => Template::Canned("site:cloud.google.com"),
        }
    }
}

impl FromStr for DorkOption {
    type Err = DorkError;

    /// Parse a selector exactly as typed ("1" through "25")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DorkOption::ALL
            .iter()
            .copied()
            .find(|option| option.number().to_string() == s)
            .ok_or_else(|| DorkError::InvalidOption(s.to_string()))
    }
}

impl fmt::Display for DorkOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}. {}", self.number(), self.description())
    }
}

/// The option listing printed when too few arguments are given
pub fn usage_text() -> String {
    let program = env!("CARGO_PKG_NAME");
    let mut lines = vec![
        format!("Usage: {program} <dork_option> <search_query> [additional_operators]"),
        "Dork options:".to_string(),
    ];
    lines.extend(DorkOption::ALL.iter().map(|option| format!("{option}")));
    lines.push("Additional operators (optional):".to_string());
    lines.push(format!(
        "  - Wildcard Operator (*): {program} 1 'search query' *"
    ));
    lines.push(format!(
        "  - Filetype Operator: {program} 4 'filetype:pdf search'"
    ));
    lines.join("\n")
}
