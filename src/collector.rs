use std::fmt::Write as _;

use log::{error, info};

use crate::gitlab::{GitLabClient, Project};

/// Health band for a schedule's recent runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthColor {
    Green,
    Amber,
    Red,
    NoData,
}

impl HealthColor {
    /// Band a success rate: >= 80 green, >= 50 amber, below that red.
    pub fn classify(rate: f64) -> Self {
        if rate >= 80.0 {
            Self::Green
        } else if rate >= 50.0 {
            Self::Amber
        } else {
            Self::Red
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
            Self::NoData => "no_data",
        }
    }
}

/// One rendered metric, one line of the report.
#[derive(Debug)]
pub struct ScheduleMetric {
    pub project: String,
    pub schedule: String,
    pub color: HealthColor,
    pub rate: f64,
}

impl ScheduleMetric {
    pub fn from_statuses(project: &str, schedule: &str, statuses: &[String]) -> Self {
        let total = statuses.len();
        let (rate, color) = if total > 0 {
            let success = statuses.iter().filter(|s| s.as_str() == "success").count();
            let rate = (success as f64 / total as f64) * 100.0;
            (rate, HealthColor::classify(rate))
        } else {
            (0.0, HealthColor::NoData)
        };

        Self {
            project: project.to_owned(),
            schedule: schedule.to_owned(),
            color,
            rate,
        }
    }
}

impl std::fmt::Display for ScheduleMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "gitlab_pipeline_schedule_success_rate{{project=\"{}\", schedule=\"{}\", color=\"{}\"}} {}",
            self.project,
            self.schedule,
            self.color.as_str(),
            self.rate
        )
    }
}

pub struct Collector {
    client: GitLabClient,
    group: Option<String>,
}

impl Collector {
    pub fn new(client: GitLabClient, group: Option<String>) -> Self {
        Self { client, group }
    }

    fn in_scope(&self, project: &Project) -> bool {
        match &self.group {
            Some(group) => project.path_with_namespace.contains(group.as_str()),
            None => true,
        }
    }

    /// Run one full collection pass and render the report.
    ///
    /// Failure handling is tiered: a failed project listing aborts the pass
    /// (empty report), a failed schedule or pipeline listing skips only that
    /// project or schedule. All failures are logged, none propagate.
    pub async fn collect(&self) -> String {
        let mut report = String::new();

        info!("Fetching all projects from GitLab API...");

        let projects = match self.client.fetch_projects().await {
            Ok(projects) => projects,
            Err(e) => {
                error!("Failed to fetch projects: {e}");
                return report;
            }
        };
        info!("Total projects retrieved: {}", projects.len());

        for project in &projects {
            if !self.in_scope(project) {
                info!(
                    "Skipping project '{}' as it does not belong to specified group",
                    project.path_with_namespace
                );
                continue;
            }

            info!(
                "Fetching pipeline schedules for project '{}' (ID: {})",
                project.path_with_namespace, project.id
            );
            let schedules = match self.client.fetch_pipeline_schedules(project.id).await {
                Ok(schedules) => schedules,
                Err(e) => {
                    error!(
                        "Failed to fetch schedules for project '{}': {e}",
                        project.path_with_namespace
                    );
                    continue;
                }
            };
            info!(
                "Schedules retrieved for project '{}': {}",
                project.path_with_namespace,
                schedules.len()
            );

            for schedule in &schedules {
                info!(
                    "Processing schedule '{}' (ID: {})",
                    schedule.description, schedule.id
                );
                let pipelines = match self
                    .client
                    .fetch_schedule_pipelines(project.id, schedule.id)
                    .await
                {
                    Ok(pipelines) => pipelines,
                    Err(e) => {
                        error!(
                            "Failed to fetch pipelines for schedule '{}' in project '{}': {e}",
                            schedule.description, project.path_with_namespace
                        );
                        continue;
                    }
                };

                let statuses: Vec<String> = pipelines.into_iter().map(|p| p.status).collect();
                let metric = ScheduleMetric::from_statuses(
                    &project.path_with_namespace,
                    &schedule.description,
                    &statuses,
                );

                info!(
                    "Success rate for schedule '{}' in project '{}': {:.2}% (Color: {})",
                    schedule.description,
                    project.path_with_namespace,
                    metric.rate,
                    metric.color.as_str()
                );

                let _ = writeln!(report, "{metric}");
            }
        }

        info!("Completed fetching all metrics.");
        report
    }
}
