// Rust guideline compliant 2026-02-06

//! Field rules of the two pipeline document kinds.
//!
//! Both kinds share every field except `ModelType` and
//! `ModelSizeEstimationKB`, which only ML pipelines carry.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9]$").expect("valid regex"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("valid regex"));

static SERVICE_ACCOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9\-]{4,28}[a-z0-9]$").expect("valid regex"));

static BUCKET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9\-_.]{1,61}[a-z0-9]$").expect("valid regex"));

static DATASET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]{1,1024}$").expect("valid regex"));

/// GPU models accepted for `ComputeResourcesGPUType`.
pub const GPU_TYPES: &[&str] = &["T4", "V100", "P100", "P4", "L4", "A100", "H100", "H200"];

/// Model kinds accepted for `ModelType`.
pub const MODEL_TYPES: &[&str] = &[
    "classification",
    "regression",
    "clustering",
    "gen-ai",
    "time-series",
];

/// Runtimes accepted for `runtimeBase`.
pub const RUNTIMES: &[&str] = &[
    "Python3.9",
    "Python3.10",
    "ApacheBeam",
    "R",
    "Dataproc",
    "TF",
    "Pytorch",
];

/// Constraint on a single value.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    /// String with a character count range and optional full-match pattern.
    Text {
        /// Minimum number of characters.
        min: usize,
        /// Maximum number of characters.
        max: usize,
        /// Pattern the whole value must match.
        pattern: Option<&'static Regex>,
    },
    /// Integer within an inclusive range.
    Integer {
        /// Lowest accepted value.
        min: i64,
        /// Highest accepted value.
        max: i64,
    },
    /// One of a fixed set of strings.
    Choice(&'static [&'static str]),
    /// Any JSON object.
    Object,
}

/// Rule for one top-level field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// JSON key.
    pub name: &'static str,
    /// Whether the key must be present.
    pub required: bool,
    /// Whether a list of values is accepted in place of a single value.
    pub many: bool,
    /// Constraint on each value.
    pub kind: Kind,
}

impl FieldRule {
    fn new(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            required: true,
            many: false,
            kind,
        }
    }

    fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn many(mut self) -> Self {
        self.many = true;
        self
    }
}

/// Pipeline document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// Machine learning pipeline.
    Ml,
    /// Agentic pipeline.
    Agentic,
}

impl SchemaKind {
    /// Kinds in the order documents are checked against them.
    pub const ALL: [SchemaKind; 2] = [SchemaKind::Ml, SchemaKind::Agentic];

    /// Field rules of this kind.
    pub fn rules(&self) -> &'static [FieldRule] {
        match self {
            SchemaKind::Ml => ML_RULES.as_slice(),
            SchemaKind::Agentic => AGENTIC_RULES.as_slice(),
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaKind::Ml => f.write_str("MLPipeline"),
            SchemaKind::Agentic => f.write_str("AgenticPipeline"),
        }
    }
}

fn text(min: usize, max: usize, pattern: Option<&'static Regex>) -> Kind {
    Kind::Text { min, max, pattern }
}

const fn integer(min: i64, max: i64) -> Kind {
    Kind::Integer { min, max }
}

fn common_rules() -> Vec<FieldRule> {
    let name = text(3, 30, Some(&*NAME_RE));
    let email = text(6, 254, Some(&*EMAIL_RE));
    let service_account = text(6, 30, Some(&*SERVICE_ACCOUNT_RE));
    let bucket = text(3, 63, Some(&*BUCKET_RE));
    let dataset = text(1, 1024, Some(&*DATASET_RE));

    vec![
        FieldRule::new("projectName", name),
        FieldRule::new("applicationName", name),
        FieldRule::new("projectDescription", text(3, 250, None)),
        FieldRule::new("adminAccounts", email).many(),
        FieldRule::new("viewerAccounts", email).many(),
        FieldRule::new("serviceAccountMaasName", service_account)
            .many()
            .optional(),
        FieldRule::new("serviceAccountExplorationName", service_account)
            .many()
            .optional(),
        FieldRule::new("serviceAccountDiscoveryName", service_account)
            .many()
            .optional(),
        FieldRule::new("bucketMaasName", bucket).optional(),
        FieldRule::new("bucketExplorationName", bucket).optional(),
        FieldRule::new("bucketDiscoveryName", bucket).optional(),
        FieldRule::new("datasetMaasName", dataset).optional(),
        FieldRule::new("datasetExplorationName", dataset).optional(),
        FieldRule::new("datasetDiscoveryName", dataset).optional(),
        FieldRule::new("ComputeResourcesCPU", integer(1, 96)),
        FieldRule::new("ComputeResourcesRAM", integer(1, 624)),
        FieldRule::new("ComputeResourcesStorage", integer(10, 65_536)),
        FieldRule::new("ComputeResourcesGPUCores", integer(0, 128)),
        FieldRule::new("ComputeResourcesGPUType", Kind::Choice(GPU_TYPES)),
        FieldRule::new("Sources", text(3, 200, None)).many(),
        FieldRule::new("InferenceSchema", Kind::Object),
        FieldRule::new("SourceSizeEstimationKB", integer(1, 1_000_000_000)),
        FieldRule::new("runtimeBase", Kind::Choice(RUNTIMES)),
    ]
}

static ML_RULES: Lazy<Vec<FieldRule>> = Lazy::new(|| {
    let mut rules = common_rules();
    rules.push(FieldRule::new("ModelType", Kind::Choice(MODEL_TYPES)).many());
    rules.push(FieldRule::new(
        "ModelSizeEstimationKB",
        integer(1, 1_000_000_000),
    ));
    rules
});

static AGENTIC_RULES: Lazy<Vec<FieldRule>> = Lazy::new(common_rules);
