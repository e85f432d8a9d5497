use ascale::model::*;
use ascale::prelude::*;
use ascale::{AutoScalingClient, Page, Paginated};
use clap::{Subcommand, ValueEnum};
use itertools::Itertools;
use serde::Serialize;
use std::fmt::Display;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Output {
    /// One line per item
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List groups, all of them when no name is given
    Groups {
        names: Vec<String>,
    },
    /// List instances managed by groups
    Instances {
        instance_ids: Vec<String>,
    },
    /// List scaling activities of a group
    Activities {
        group: Option<String>,
        /// Stop after this many activities
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List scaling policies
    Policies {
        group: Option<String>,
    },
    /// List scheduled actions
    Scheduled {
        group: Option<String>,
    },
    /// List tags, optionally filtered (e.g. --filter auto-scaling-group=web)
    Tags {
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,
    },
    /// List lifecycle hooks of a group
    #[command(arg_required_else_help = true)]
    Hooks {
        group: String,
    },
    /// Show account limits
    Limits,
    /// Set the desired capacity of a group
    #[command(arg_required_else_help = true)]
    SetCapacity {
        group: String,
        desired: i32,
        /// Wait for the cooldown period to end first
        #[arg(long, default_value_t)]
        honor_cooldown: bool,
    },
    /// Suspend processes of a group, all of them when none is given
    #[command(arg_required_else_help = true)]
    Suspend {
        group: String,
        processes: Vec<String>,
    },
    /// Resume processes of a group, all of them when none is given
    #[command(arg_required_else_help = true)]
    Resume {
        group: String,
        processes: Vec<String>,
    },
    /// Move instances into standby, or back into service with --exit
    #[command(arg_required_else_help = true)]
    Standby {
        group: String,
        #[arg(required = true)]
        instance_ids: Vec<String>,
        /// Move the instances back into service
        #[arg(long, default_value_t)]
        exit: bool,
        /// Don't lower the desired capacity while the instances are in standby
        #[arg(long, default_value_t)]
        keep_capacity: bool,
    },
    /// Show or reset the configuration
    Config {
        /// Reset to default configuration
        #[arg(long, default_value_t)]
        reset: bool,
        /// Clear credentials cache
        #[arg(long, default_value_t)]
        clear_cache: bool,
    },
    /// Print shell completions
    #[command(arg_required_else_help = true)]
    Completions {
        shell: clap_complete::Shell,
    },
}

/// Parses `name=value` into a tag filter.
pub fn parse_filter(s: &str) -> Result<(String, String)> {
    let (name, value) = s.split_once('=').ok_or_else(|| eyre!("expected name=value, got {s:?}"))?;
    ensure!(!name.trim().is_empty(), "filter name is empty in {s:?}");
    Ok((name.trim().to_string(), value.trim().to_string()))
}

/// Groups filters by name, keeping the order names first appear in.
pub fn tag_filters(filters: &[(String, String)]) -> Vec<Filter> {
    filters
        .iter()
        .map(|(name, _)| name)
        .unique()
        .map(|name| {
            let values = filters.iter().filter(|(n, _)| n == name).map(|(_, v)| v.clone());
            Filter::default().with_name(name.clone()).with_values(values)
        })
        .collect()
}

/// Sends `request` page by page and gathers the items of every page.
pub fn collect_all<R, T>(
    client: &AutoScalingClient,
    request: R,
    items: fn(&R::Output) -> Option<&[T]>,
) -> Result<Vec<T>>
where
    R: Paginated,
    R::Output: Page,
    T: Clone,
{
    let mut all = Vec::new();
    for page in client.paginate(request) {
        all.extend_from_slice(items(&page?).unwrap_or_default());
    }
    Ok(all)
}

pub fn render<T: Display + Serialize>(items: &[T], output: Output) -> Result<String> {
    Ok(match output {
        Output::Text => items.iter().join("\n"),
        Output::Json => serde_json::to_string_pretty(items)?,
    })
}

pub struct Ctx<'a> {
    pub client: &'a AutoScalingClient,
    pub output: Output,
    pub page_size: Option<i32>,
}

impl Ctx<'_> {
    fn emit<T: Display + Serialize>(&self, items: &[T]) -> Result<()> {
        let out = render(items, self.output)?;
        if !out.is_empty() {
            p!("{out}");
        }
        Ok(())
    }
}

impl Commands {
    pub fn groups(names: &[String], ctx: &Ctx) -> Result<()> {
        let mut request = DescribeAutoScalingGroupsRequest::default()
            .with_auto_scaling_group_names(names.iter().cloned());
        request.set_max_records(ctx.page_size);
        let groups = collect_all(
            ctx.client,
            request,
            DescribeAutoScalingGroupsResult::auto_scaling_groups,
        )?;
        ctx.emit(&groups)
    }

    pub fn instances(instance_ids: &[String], ctx: &Ctx) -> Result<()> {
        let mut request = DescribeAutoScalingInstancesRequest::default()
            .with_instance_ids(instance_ids.iter().cloned());
        request.set_max_records(ctx.page_size);
        let instances = collect_all(
            ctx.client,
            request,
            DescribeAutoScalingInstancesResult::auto_scaling_instances,
        )?;
        ctx.emit(&instances)
    }

    pub fn activities(group: Option<&str>, limit: Option<usize>, ctx: &Ctx) -> Result<()> {
        let mut request = DescribeScalingActivitiesRequest::default();
        request.set_auto_scaling_group_name(group.map(String::from));
        request.set_max_records(ctx.page_size);
        let mut activities = Vec::new();
        for page in ctx.client.paginate(request) {
            activities.extend_from_slice(page?.activities().unwrap_or_default());
            if limit.map_or(false, |limit| activities.len() >= limit) {
                break;
            }
        }
        if let Some(limit) = limit {
            activities.truncate(limit);
        }
        ctx.emit(&activities)
    }

    pub fn policies(group: Option<&str>, ctx: &Ctx) -> Result<()> {
        let mut request = DescribePoliciesRequest::default();
        request.set_auto_scaling_group_name(group.map(String::from));
        request.set_max_records(ctx.page_size);
        let policies = collect_all(ctx.client, request, DescribePoliciesResult::scaling_policies)?;
        ctx.emit(&policies)
    }

    pub fn scheduled(group: Option<&str>, ctx: &Ctx) -> Result<()> {
        let mut request = DescribeScheduledActionsRequest::default();
        request.set_auto_scaling_group_name(group.map(String::from));
        request.set_max_records(ctx.page_size);
        let actions = collect_all(
            ctx.client,
            request,
            DescribeScheduledActionsResult::scheduled_update_group_actions,
        )?;
        ctx.emit(&actions)
    }

    pub fn tags(filters: &[(String, String)], ctx: &Ctx) -> Result<()> {
        let mut request = DescribeTagsRequest::default().with_filters(tag_filters(filters));
        request.set_max_records(ctx.page_size);
        let tags = collect_all(ctx.client, request, DescribeTagsResult::tags)?;
        ctx.emit(&tags)
    }

    pub fn hooks(group: &str, ctx: &Ctx) -> Result<()> {
        let request = DescribeLifecycleHooksRequest::default().with_auto_scaling_group_name(group);
        let res = ctx.client.describe_lifecycle_hooks(&request)?;
        ctx.emit(res.lifecycle_hooks().unwrap_or_default())
    }

    pub fn limits(ctx: &Ctx) -> Result<()> {
        let res = ctx.client.describe_account_limits(&DescribeAccountLimitsRequest::default())?;
        ctx.emit(&[res])
    }

    pub fn set_capacity(group: &str, desired: i32, honor_cooldown: bool, ctx: &Ctx) -> Result<()> {
        let request = SetDesiredCapacityRequest::default()
            .with_auto_scaling_group_name(group)
            .with_desired_capacity(desired)
            .with_honor_cooldown(honor_cooldown);
        ctx.client.set_desired_capacity(&request)?;
        p!("Desired capacity of {group} set to {desired}");
        Ok(())
    }

    pub fn suspend(group: &str, processes: &[String], ctx: &Ctx) -> Result<()> {
        let request = SuspendProcessesRequest::default()
            .with_auto_scaling_group_name(group)
            .with_scaling_processes(processes.iter().cloned());
        ctx.client.suspend_processes(&request)?;
        p!("Suspended {} on {group}", describe_processes(processes));
        Ok(())
    }

    pub fn resume(group: &str, processes: &[String], ctx: &Ctx) -> Result<()> {
        let request = ResumeProcessesRequest::default()
            .with_auto_scaling_group_name(group)
            .with_scaling_processes(processes.iter().cloned());
        ctx.client.resume_processes(&request)?;
        p!("Resumed {} on {group}", describe_processes(processes));
        Ok(())
    }

    pub fn standby(
        group: &str,
        instance_ids: &[String],
        exit: bool,
        keep_capacity: bool,
        ctx: &Ctx,
    ) -> Result<()> {
        let activities = if exit {
            let request = ExitStandbyRequest::default()
                .with_auto_scaling_group_name(group)
                .with_instance_ids(instance_ids.iter().cloned());
            ctx.client.exit_standby(&request)?.activities().unwrap_or_default().to_vec()
        } else {
            let request = EnterStandbyRequest::default()
                .with_auto_scaling_group_name(group)
                .with_instance_ids(instance_ids.iter().cloned())
                .with_should_decrement_desired_capacity(!keep_capacity);
            ctx.client.enter_standby(&request)?.activities().unwrap_or_default().to_vec()
        };
        ctx.emit(&activities)
    }
}

fn describe_processes(processes: &[String]) -> String {
    if processes.is_empty() {
        "all processes".to_string()
    } else {
        processes.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_parse_and_group_by_name() {
        let filters = ["auto-scaling-group=web", "key=Name", "auto-scaling-group= worker "]
            .into_iter()
            .map(parse_filter)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        let grouped = tag_filters(&filters);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].name(), Some("auto-scaling-group"));
        assert_eq!(grouped[0].values().unwrap(), ["web", "worker"]);
        assert_eq!(grouped[1].values().unwrap(), ["Name"]);
        assert!(parse_filter("no-separator").is_err());
        assert!(parse_filter("=value").is_err());
    }

    #[test]
    fn renders_text_and_json() {
        let tags = [
            TagDescription::default().with_key("Name").with_value("web"),
            TagDescription::default().with_key("env"),
        ];
        assert_eq!(render(&tags, Output::Text).unwrap(), "{Key: Name,Value: web}\n{Key: env}");
        let json: serde_json::Value =
            serde_json::from_str(&render(&tags, Output::Json).unwrap()).unwrap();
        assert_eq!(json[0]["Key"], "Name");
        assert_eq!(json[1].get("Value"), None);
        assert_eq!(render::<TagDescription>(&[], Output::Text).unwrap(), "");
    }

    #[test]
    fn all_processes_when_none_given() {
        assert_eq!(describe_processes(&[]), "all processes");
        assert_eq!(describe_processes(&["Launch".into(), "Terminate".into()]), "Launch, Terminate");
    }
}
