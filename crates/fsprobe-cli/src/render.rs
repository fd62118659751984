//! Plain-text rendering of operation results and exit-code mapping.

use std::process::ExitCode;

use fsprobe::model::{ListDirectoryOutput, TimeOutput};
use fsprobe::resources::ResourceDescriptor;
use fsprobe::{ErrorKind, SystemContext};

/// Exit status for a failed operation.
pub fn exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::Io => 1,
        ErrorKind::InvalidInput => 2,
        ErrorKind::NotFound => 3,
        ErrorKind::PermissionDenied => 4,
    }
}

pub fn failure_exit(kind: ErrorKind) -> ExitCode {
    ExitCode::from(exit_code(kind))
}

/// One entry per line; directories get a trailing `/`.
pub fn listing(out: &ListDirectoryOutput) -> String {
    out.entries
        .iter()
        .map(|e| {
            if e.is_directory {
                format!("{}/", e.name)
            } else {
                e.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn system_info(ctx: &SystemContext) -> String {
    format!(
        "platform: {}\nruntime: {}\ncwd: {}\nenvironment: {}",
        ctx.platform, ctx.runtime_version, ctx.current_working_directory, ctx.environment_mode
    )
}

pub fn time(out: &TimeOutput) -> String {
    out.time.clone()
}

/// Markdown table of resources, like the MCP listing.
pub fn resource_table(resources: &[ResourceDescriptor]) -> String {
    let mut out = String::new();
    out.push_str("| uri | name | mime_type |\n");
    out.push_str("|-----|------|-----------|\n");
    for r in resources {
        out.push_str(&format!("| {} | {} | {} |\n", r.uri, r.name, r.mime_type));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsprobe::model::DirEntry;

    #[test]
    fn exit_codes_are_distinct_and_nonzero() {
        let codes = [
            exit_code(ErrorKind::Io),
            exit_code(ErrorKind::InvalidInput),
            exit_code(ErrorKind::NotFound),
            exit_code(ErrorKind::PermissionDenied),
        ];
        assert!(codes.iter().all(|c| *c != 0));
        let mut dedup = codes.to_vec();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), codes.len());
    }

    #[test]
    fn directories_get_trailing_slash() {
        let out = ListDirectoryOutput {
            entries: vec![
                DirEntry {
                    name: "a.txt".into(),
                    is_directory: false,
                },
                DirEntry {
                    name: "b".into(),
                    is_directory: true,
                },
            ],
        };
        assert_eq!(listing(&out), "a.txt\nb/");
    }

    #[test]
    fn resource_table_has_a_row_per_resource() {
        let table = resource_table(fsprobe::resources::list_resources());
        assert_eq!(table.lines().count(), 2 + fsprobe::resources::list_resources().len());
        assert!(table.contains("| system://info | System Information | application/json |"));
    }
}
