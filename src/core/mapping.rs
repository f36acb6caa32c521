// src/core/mapping.rs

use crate::{
    constants::MAPPINGS_FILENAME,
    models::{CommandMapping, MappingsFile},
};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("No mapping found for Linux command: {command}")]
    NotFound { command: String },
    #[error("No mapping found for Docker command: {command}")]
    DockerNotFound { command: String },
    #[error("Failed to read mappings file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse mappings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Failed to write mappings file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize mappings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Holds the set of Linux-to-Docker command mappings and resolves lookups
/// against it. The set is read-only after load (safe for concurrent reads);
/// `save` exists for tooling, not the execution hot path.
#[derive(Debug, Clone)]
pub struct MappingEngine {
    mappings: Vec<CommandMapping>,
    data_path: PathBuf,
}

impl MappingEngine {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            mappings: Vec::new(),
            data_path: data_path.into(),
        }
    }

    fn data_file(&self) -> PathBuf {
        self.data_path.join(MAPPINGS_FILENAME)
    }

    /// Loads mappings from the data file. A missing file falls back silently
    /// to the built-in default set; a present-but-malformed file is a hard
    /// load error.
    pub fn load(&mut self) -> Result<(), MappingError> {
        let path = self.data_file();
        if !path.exists() {
            log::debug!(
                "Mappings file '{}' not found, using built-in defaults.",
                path.display()
            );
            self.mappings = default_mappings();
            return Ok(());
        }

        let content = fs::read_to_string(&path).map_err(|source| MappingError::Read {
            path: path.clone(),
            source,
        })?;
        let file: MappingsFile =
            toml::from_str(&content).map_err(|source| MappingError::Parse { path, source })?;
        self.mappings = file.mappings;
        log::debug!("Loaded {} command mappings.", self.mappings.len());
        Ok(())
    }

    /// Serializes the in-memory set back to the data file.
    pub fn save(&self) -> Result<(), MappingError> {
        let file = MappingsFile {
            mappings: self.mappings.clone(),
        };
        let content = toml::to_string_pretty(&file)?;
        if let Some(parent) = self.data_file().parent() {
            fs::create_dir_all(parent).map_err(|source| MappingError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(self.data_file(), content).map_err(|source| MappingError::Write {
            path: self.data_file(),
            source,
        })
    }

    /// Exact match on `linux_command`. Duplicates are tolerated: the first
    /// record in load order wins.
    pub fn find_by_linux_command(&self, cmd: &str) -> Result<&CommandMapping, MappingError> {
        self.mappings
            .iter()
            .find(|m| m.linux_command == cmd)
            .ok_or_else(|| MappingError::NotFound {
                command: cmd.to_string(),
            })
    }

    /// Option-aware lookup: tries an exact match on `base` first, then scans
    /// mappings shaped like `"base -x"`, matching when any option token
    /// embedded in the mapping's own Linux command corresponds to a key in
    /// the caller's parsed options. This is how `tail -f` resolves to a
    /// different mapping than plain `tail`. Overlaps resolve to load order.
    pub fn find_by_linux_command_with_options(
        &self,
        base: &str,
        options: &HashMap<String, String>,
    ) -> Result<&CommandMapping, MappingError> {
        for mapping in &self.mappings {
            if mapping.linux_command == base {
                return Ok(mapping);
            }
            let mut parts = mapping.linux_command.split_whitespace();
            if parts.next() != Some(base) {
                continue;
            }
            for part in parts {
                if let Some(key) = part.strip_prefix('-') {
                    let key = key.strip_prefix('-').unwrap_or(key);
                    if options.contains_key(key) {
                        return Ok(mapping);
                    }
                }
            }
        }
        Err(MappingError::NotFound {
            command: base.to_string(),
        })
    }

    /// Prefix match on `docker_command`, first in load order wins.
    pub fn find_by_docker_command(&self, cmd: &str) -> Result<&CommandMapping, MappingError> {
        self.mappings
            .iter()
            .find(|m| m.docker_command.starts_with(cmd))
            .ok_or_else(|| MappingError::DockerNotFound {
                command: cmd.to_string(),
            })
    }

    pub fn list_by_category(&self, category: &str) -> Vec<&CommandMapping> {
        self.mappings
            .iter()
            .filter(|m| m.category == category)
            .collect()
    }

    /// Case-insensitive substring search over the Linux command, Docker
    /// command, and description fields.
    pub fn search(&self, query: &str) -> Vec<&CommandMapping> {
        let query = query.to_lowercase();
        self.mappings
            .iter()
            .filter(|m| {
                m.linux_command.to_lowercase().contains(&query)
                    || m.docker_command.to_lowercase().contains(&query)
                    || m.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn all(&self) -> &[CommandMapping] {
        &self.mappings
    }

    /// Deduplicated categories. Iteration order is unspecified; callers sort
    /// at the render boundary.
    pub fn categories(&self) -> Vec<&str> {
        let set: HashSet<&str> = self.mappings.iter().map(|m| m.category.as_str()).collect();
        set.into_iter().collect()
    }
}

fn mapping(
    id: &str,
    linux: &str,
    docker: &str,
    category: &str,
    description: &str,
    linux_example: &str,
    docker_example: &str,
    notes: &[&str],
    ja_description: &str,
) -> CommandMapping {
    CommandMapping {
        id: id.to_string(),
        linux_command: linux.to_string(),
        docker_command: docker.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        linux_example: linux_example.to_string(),
        docker_example: docker_example.to_string(),
        notes: notes.iter().map(|n| n.to_string()).collect(),
        warnings: Vec::new(),
        localized_description: [
            ("en".to_string(), description.to_string()),
            ("ja".to_string(), ja_description.to_string()),
        ]
        .into(),
        localized_notes: HashMap::new(),
    }
}

/// The built-in default mapping set, used when no data file is present.
pub fn default_mappings() -> Vec<CommandMapping> {
    vec![
        mapping(
            "ls-docker-images",
            "ls",
            "docker images",
            "list-operations",
            "List display - Show available images",
            "ls -la",
            "docker images -a",
            &["docker images shows Docker images", "-a also shows intermediate images"],
            "リスト表示 - 利用可能なイメージを表示",
        ),
        mapping(
            "ps-docker-ps",
            "ps",
            "docker ps",
            "process-management",
            "Process list display",
            "ps aux",
            "docker ps -a",
            &["ps shows all processes, docker ps shows containers only"],
            "プロセス一覧表示",
        ),
        mapping(
            "kill-docker-stop",
            "kill",
            "docker stop",
            "process-management",
            "Stop process",
            "kill 1234",
            "docker stop container_name",
            &["kill uses PID, docker stop uses container name or ID"],
            "プロセス停止",
        ),
        mapping(
            "rm-docker-rm",
            "rm",
            "docker rm",
            "file-operations",
            "Remove files/containers",
            "rm file.txt",
            "docker rm container_name",
            &["rm removes files, docker rm removes containers"],
            "ファイル/コンテナ削除",
        ),
        // Ordered before plain "tail": the option-aware resolver walks the
        // set in load order, so the dedicated follow mapping must come first.
        mapping(
            "tail-f-docker-logs-f",
            "tail -f",
            "docker logs -f",
            "logs-monitoring",
            "Follow logs in real time",
            "tail -f /var/log/app.log",
            "docker logs -f container_name",
            &["Streams until interrupted; type 'exit' or press Ctrl+C to stop"],
            "ログをリアルタイムで追跡",
        ),
        mapping(
            "tail-docker-logs",
            "tail",
            "docker logs",
            "logs-monitoring",
            "Display logs",
            "tail /var/log/app.log",
            "docker logs container_name",
            &["tail shows file content, docker logs shows container logs"],
            "ログ表示",
        ),
        mapping(
            "cd-container-entry",
            "cd",
            "docker exec",
            "container-access",
            "Enter a running container",
            "cd mycontainer",
            "docker exec -it mycontainer /bin/bash",
            &["Tries /bin/bash, /bin/sh, /bin/ash in order"],
            "実行中のコンテナに入る",
        ),
        mapping(
            "cp-docker-cp",
            "cp",
            "docker cp",
            "file-operations",
            "Copy files",
            "cp file.txt /dest/",
            "docker cp container_name:/file.txt /dest/",
            &["docker cp transfers files between container and host"],
            "ファイルコピー",
        ),
        mapping(
            "df-docker-system-df",
            "df",
            "docker system df",
            "system-information",
            "Display disk usage",
            "df -h",
            "docker system df",
            &["docker system df shows Docker disk usage"],
            "ディスク使用量表示",
        ),
        mapping(
            "free-docker-stats-no-stream",
            "free",
            "docker stats --no-stream",
            "system-information",
            "Display memory usage",
            "free -h",
            "docker stats --no-stream",
            &["docker stats shows container memory usage"],
            "メモリ使用量表示",
        ),
        mapping(
            "top-docker-stats",
            "top",
            "docker stats",
            "system-information",
            "Real-time system information",
            "top",
            "docker stats",
            &["top shows system-wide info, docker stats shows container statistics"],
            "リアルタイムシステム情報",
        ),
    ]
}
