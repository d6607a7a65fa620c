//! # Route Table
//!
//! Static description of every module the shell can show. Built once at
//! startup (built-in set plus config overrides) and never mutated after.
//!
//! ```text
//! RouteTable
//! ├── entries: HashMap<ModuleId, RouteTableEntry>   // O(1) lookup
//! ├── order: Vec<ModuleId>                          // declaration order
//! └── fallback: ModuleId                            // global fallback
//! ```
//!
//! The navigator asks it two questions: "does this id exist?" and "how do I
//! normalize a payload for it?". The shell asks a third: "which module can I
//! actually render for this id?" (see [`RouteTable::resolve_renderable`]).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

/// Key used for bare payloads when a route declares no canonical key.
pub const DEFAULT_PARAM_KEY: &str = "id";

/// Module shown when nothing else resolves.
pub const DEFAULT_FALLBACK_MODULE: &str = "dashboard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTableEntry {
    pub id: String,
    pub title: String,
    /// Parameter keys this module understands. Anything else is dropped.
    #[serde(default)]
    pub accepts: BTreeSet<String>,
    /// Canonical key a bare payload is wrapped under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Module to show instead when this one has no renderable screen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    /// Listed in the shell's sidebar.
    #[serde(default)]
    pub sidebar: bool,
}

impl RouteTableEntry {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            accepts: BTreeSet::new(),
            key: None,
            fallback: None,
            sidebar: false,
        }
    }

    /// Declare `key` as the canonical (and accepted) parameter.
    pub fn keyed(mut self, key: &str) -> Self {
        self.accepts.insert(key.to_string());
        self.key = Some(key.to_string());
        self
    }

    pub fn accepting(mut self, key: &str) -> Self {
        self.accepts.insert(key.to_string());
        self
    }

    pub fn falling_back_to(mut self, module: &str) -> Self {
        self.fallback = Some(module.to_string());
        self
    }

    pub fn in_sidebar(mut self) -> Self {
        self.sidebar = true;
        self
    }

    /// The key a bare payload gets wrapped under.
    pub fn canonical_key(&self) -> &str {
        self.key.as_deref().unwrap_or(DEFAULT_PARAM_KEY)
    }

    pub fn accepts_key(&self, key: &str) -> bool {
        self.accepts.contains(key)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTableError {
    DuplicateModule(String),
    UnknownFallback { module: String, fallback: String },
    MissingGlobalFallback(String),
    KeyNotAccepted { module: String, key: String },
}

impl fmt::Display for RouteTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteTableError::DuplicateModule(id) => {
                write!(f, "module '{id}' is declared more than once")
            }
            RouteTableError::UnknownFallback { module, fallback } => {
                write!(f, "module '{module}' falls back to unknown module '{fallback}'")
            }
            RouteTableError::MissingGlobalFallback(id) => {
                write!(f, "global fallback module '{id}' is not in the route table")
            }
            RouteTableError::KeyNotAccepted { module, key } => {
                write!(f, "module '{module}' declares key '{key}' but does not accept it")
            }
        }
    }
}

impl std::error::Error for RouteTableError {}

// ============================================================================
// Table
// ============================================================================

#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: HashMap<String, RouteTableEntry>,
    order: Vec<String>,
    fallback: String,
}

impl RouteTable {
    /// Build and validate a table. Entries keep their declaration order.
    pub fn new(entries: Vec<RouteTableEntry>, fallback: &str) -> Result<Self, RouteTableError> {
        let mut map = HashMap::with_capacity(entries.len());
        let mut order = Vec::with_capacity(entries.len());

        for entry in entries {
            if map.contains_key(&entry.id) {
                return Err(RouteTableError::DuplicateModule(entry.id));
            }
            order.push(entry.id.clone());
            map.insert(entry.id.clone(), entry);
        }

        if !map.contains_key(fallback) {
            return Err(RouteTableError::MissingGlobalFallback(fallback.to_string()));
        }

        for id in &order {
            let entry = &map[id];
            if let Some(ref target) = entry.fallback
                && !map.contains_key(target)
            {
                return Err(RouteTableError::UnknownFallback {
                    module: id.clone(),
                    fallback: target.clone(),
                });
            }
            if let Some(ref key) = entry.key
                && !entry.accepts.contains(key)
            {
                return Err(RouteTableError::KeyNotAccepted {
                    module: id.clone(),
                    key: key.clone(),
                });
            }
        }

        Ok(Self {
            entries: map,
            order,
            fallback: fallback.to_string(),
        })
    }

    /// The HRMS module set.
    pub fn builtin() -> Self {
        // Static data, validated by `test_builtin_table_is_valid`.
        Self::new(builtin_entries(), DEFAULT_FALLBACK_MODULE)
            .unwrap_or_else(|e| panic!("built-in route table is invalid: {e}"))
    }

    /// Rebuild with `overrides` replacing same-id entries or appended at the end.
    pub fn with_overrides(&self, overrides: Vec<RouteTableEntry>) -> Result<Self, RouteTableError> {
        let mut entries: Vec<RouteTableEntry> = self.entries().cloned().collect();
        let mut seen = HashSet::new();
        for entry in overrides {
            if !seen.insert(entry.id.clone()) {
                return Err(RouteTableError::DuplicateModule(entry.id));
            }
            match entries.iter_mut().find(|e| e.id == entry.id) {
                Some(existing) => *existing = entry,
                None => entries.push(entry),
            }
        }
        Self::new(entries, &self.fallback)
    }

    pub fn get(&self, id: &str) -> Option<&RouteTableEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// All entries, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteTableEntry> {
        self.order.iter().map(|id| &self.entries[id])
    }

    pub fn sidebar(&self) -> impl Iterator<Item = &RouteTableEntry> {
        self.entries().filter(|e| e.sidebar)
    }

    /// Title for `id`, or the id itself when unknown.
    pub fn title_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|e| e.title.as_str()).unwrap_or(id)
    }

    /// Walk per-entry fallbacks from `id` until `is_renderable` accepts a module.
    ///
    /// Unknown ids, dead ends and cycles all end at the global fallback.
    pub fn resolve_renderable<'a>(
        &'a self,
        id: &'a str,
        is_renderable: impl Fn(&str) -> bool,
    ) -> &'a str {
        let mut cursor = id;
        // Each hop visits a distinct entry, so the table size bounds the walk.
        for _ in 0..=self.order.len() {
            let Some(entry) = self.get(cursor) else {
                break;
            };
            if is_renderable(&entry.id) {
                return &entry.id;
            }
            match entry.fallback.as_deref() {
                Some(next) if next != cursor => cursor = next,
                _ => break,
            }
        }
        &self.fallback
    }

    /// The sidebar module `id` belongs to: itself, or the first sidebar
    /// entry along its fallback chain.
    pub fn sidebar_section<'a>(&'a self, id: &'a str) -> Option<&'a str> {
        let mut cursor = self.get(id)?;
        for _ in 0..=self.order.len() {
            if cursor.sidebar {
                return Some(&cursor.id);
            }
            cursor = self.get(cursor.fallback.as_deref()?)?;
        }
        None
    }
}

fn builtin_entries() -> Vec<RouteTableEntry> {
    vec![
        RouteTableEntry::new("dashboard", "Dashboard").in_sidebar(),
        RouteTableEntry::new("employees", "Employees").in_sidebar(),
        RouteTableEntry::new("employee-details", "Employee Details")
            .keyed("employeeId")
            .accepting("tab")
            .falling_back_to("employees"),
        RouteTableEntry::new("add-employee", "Add Employee").falling_back_to("employees"),
        RouteTableEntry::new("attendance", "Attendance").in_sidebar(),
        RouteTableEntry::new("attendance-calendar", "Attendance Calendar")
            .keyed("employeeId")
            .accepting("month")
            .falling_back_to("attendance"),
        RouteTableEntry::new("leave-requests", "Leave Requests")
            .accepting("status")
            .in_sidebar(),
        RouteTableEntry::new("recruitment", "Recruitment").in_sidebar(),
        RouteTableEntry::new("job-details", "Job Details")
            .keyed("jobId")
            .falling_back_to("recruitment"),
        RouteTableEntry::new("candidate-details", "Candidate Details")
            .keyed("candidateId")
            .accepting("jobId")
            .falling_back_to("recruitment"),
        RouteTableEntry::new("meetings", "Meetings").in_sidebar(),
        RouteTableEntry::new("meeting-details", "Meeting Details")
            .keyed("meetingId")
            .falling_back_to("meetings"),
        RouteTableEntry::new("projects", "Projects").in_sidebar(),
        RouteTableEntry::new("project-details", "Project Details")
            .keyed("projectId")
            .falling_back_to("projects"),
        RouteTableEntry::new("tasks", "Tasks").accepting("projectId").in_sidebar(),
        RouteTableEntry::new("task-details", "Task Details")
            .keyed("taskId")
            .accepting("projectId")
            .falling_back_to("tasks"),
        RouteTableEntry::new("payroll", "Payroll").in_sidebar(),
        RouteTableEntry::new("settings", "Settings").in_sidebar(),
    ]
}
