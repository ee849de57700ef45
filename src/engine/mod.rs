//! Query engine
//!
//! Every query re-reads its inputs from disk and builds its report from scratch;
//! nothing is cached between calls.

mod reports;

pub(crate) use reports::{
    CacheEfficiency, CacheReport, DailyReport, HeatmapReport, HeatmapRow, HourCell,
    InsightsReport, ModelReport, OverviewReport, ProjectCount, ToolsReport,
};

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use indexmap::IndexMap;

use crate::consts::DEFAULT_SUBSCRIPTION_COST;
use crate::core::{
    DAYS_PER_WEEK, DailyActivity, FunStats, HOURS_PER_DAY, Productivity, PromptStats,
    TokenCounts, calculate_streaks,
};
use crate::error::AppError;
use crate::pricing::{PricingTable, cache_economics, model_display_name, summarize_costs};
use crate::source::{ClaudePaths, UsageSnapshot, load_history, load_tool_usage};
use crate::utils::{Timezone, round_cents};

const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub(crate) struct Engine {
    paths: ClaudePaths,
    pricing: PricingTable,
    subscription_cost: f64,
    timezone: Timezone,
    /// Pinned "today" for streaks; the current UTC date when unset.
    today: Option<NaiveDate>,
}

impl Engine {
    pub(crate) fn new(paths: ClaudePaths) -> Self {
        Self {
            paths,
            pricing: PricingTable::builtin(),
            subscription_cost: DEFAULT_SUBSCRIPTION_COST,
            timezone: Timezone::Local,
            today: None,
        }
    }

    pub(crate) fn with_pricing(mut self, pricing: PricingTable) -> Self {
        self.pricing = pricing;
        self
    }

    pub(crate) fn with_subscription_cost(mut self, cost: f64) -> Self {
        self.subscription_cost = cost;
        self
    }

    pub(crate) fn with_timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub(crate) fn paths(&self) -> &ClaudePaths {
        &self.paths
    }

    fn snapshot(&self) -> Result<UsageSnapshot, AppError> {
        UsageSnapshot::load(&self.paths.stats_file)
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    pub(crate) fn overview(&self) -> Result<OverviewReport, AppError> {
        let snapshot = self.snapshot()?;
        let history = load_history(&self.paths, self.timezone);

        let costs = summarize_costs(model_tokens(&snapshot), &self.pricing);
        let model_costs = costs
            .models
            .iter()
            .map(|m| (m.model.clone(), round_cents(m.cost)))
            .collect::<IndexMap<_, _>>();

        Ok(OverviewReport {
            total_sessions: history.total_sessions,
            total_messages: snapshot.total_messages,
            total_prompts: history.total_prompts,
            total_input: costs.tokens.input,
            total_output: costs.tokens.output,
            total_cache_read: costs.tokens.cache_read,
            total_cache_write: costs.tokens.cache_write,
            total_cost: round_cents(costs.total),
            pro_subscription: self.subscription_cost,
            savings: round_cents(costs.savings(self.subscription_cost)),
            roi: costs.roi_percent(self.subscription_cost),
            model_costs,
            first_session: history.first_activity.map(iso_millis),
            last_session: history.last_activity.map(iso_millis),
            active_days: history.active_days(),
            model_usage: snapshot.model_usage,
            longest_session: snapshot.longest_session,
        })
    }

    pub(crate) fn daily(&self) -> DailyReport {
        let history = load_history(&self.paths, self.timezone);
        history.daily.iter().map(DailyActivity::from).collect()
    }

    pub(crate) fn heatmap(&self) -> HeatmapReport {
        let history = load_history(&self.paths, self.timezone);
        let heatmap = history
            .weekday_hours
            .iter()
            .enumerate()
            .map(|(day_index, row)| HeatmapRow {
                day: WEEKDAY_LABELS[day_index],
                day_index,
                hours: (0..HOURS_PER_DAY)
                    .map(|hour| HourCell {
                        hour,
                        count: row[hour],
                    })
                    .collect(),
            })
            .collect();
        HeatmapReport {
            heatmap,
            max_count: history.busiest_cell().max(1),
        }
    }

    pub(crate) fn insights(&self) -> Result<InsightsReport, AppError> {
        let snapshot = self.snapshot()?;
        let history = load_history(&self.paths, self.timezone);
        Ok(InsightsReport {
            streaks: calculate_streaks(&history.daily, self.today()),
            productivity: Productivity::from_history(&history),
            prompts: PromptStats::new(history.total_prompts, &history.prompt_lengths),
            fun_stats: FunStats::from_output_tokens(snapshot.totals().output),
        })
    }

    pub(crate) fn cache(&self) -> Result<CacheReport, AppError> {
        let snapshot = self.snapshot()?;
        let economics = cache_economics(model_tokens(&snapshot), &self.pricing);
        Ok(CacheReport {
            cache_read: economics.cache_read,
            cache_write: economics.cache_write,
            hit_rate: economics.hit_rate(),
            savings: round_cents(economics.savings),
            efficiency: CacheEfficiency {
                fresh_tokens: economics.fresh_input,
                cached_tokens: economics.cache_read,
                ratio: economics.efficiency_ratio(),
            },
        })
    }

    pub(crate) fn projects(&self) -> Vec<ProjectCount> {
        let history = load_history(&self.paths, self.timezone);
        history
            .projects
            .ranked()
            .into_iter()
            .map(|(name, prompts)| ProjectCount {
                name: name.to_string(),
                prompts,
            })
            .collect()
    }

    pub(crate) fn tools(&self) -> ToolsReport {
        let usage = load_tool_usage(&self.paths);
        ToolsReport {
            tools: usage.ranked(),
            read_write_ratio: usage.ratio(),
            exploring_vs_building: usage.work_style(),
        }
    }

    pub(crate) fn models(&self) -> Result<Vec<ModelReport>, AppError> {
        let snapshot = self.snapshot()?;
        let costs = summarize_costs(model_tokens(&snapshot), &self.pricing);
        let total_output = costs.tokens.output;

        let mut models: Vec<ModelReport> = costs
            .models
            .into_iter()
            .map(|m| ModelReport {
                name: model_display_name(&m.model),
                percentage: share_percent(m.tokens.output, total_output),
                cost: round_cents(m.cost),
                output_tokens: m.tokens.output,
                input_tokens: m.tokens.input,
                cache_read: m.tokens.cache_read,
                cache_write: m.tokens.cache_write,
                full_name: m.model,
            })
            .collect();
        models.sort_by(|a, b| b.output_tokens.cmp(&a.output_tokens));
        Ok(models)
    }
}

fn model_tokens(snapshot: &UsageSnapshot) -> impl Iterator<Item = (&str, TokenCounts)> {
    snapshot
        .model_usage
        .iter()
        .map(|(model, counters)| (model.as_str(), TokenCounts::from(counters)))
}

fn share_percent(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u64
}

fn iso_millis(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const SNAPSHOT: &str = r#"{
        "modelUsage": {
            "claude-opus-4-5-20251101": {
                "inputTokens": 1000000, "outputTokens": 20000,
                "cacheReadInputTokens": 1000000, "cacheCreationInputTokens": 0,
                "webSearchRequests": 2, "contextWindow": 200000
            },
            "claude-sonnet-4-5-20250929": {
                "inputTokens": 1000000, "outputTokens": 60000,
                "cacheReadInputTokens": 3000000, "cacheCreationInputTokens": 1000000
            }
        },
        "totalMessages": 321,
        "longestSession": {"sessionId": "s1", "duration": 3600000}
    }"#;

    const HISTORY: &[&str] = &[
        r#"{"timestamp":1767261600000,"sessionId":"s1","project":"/work/api","display":"fix the build"}"#,
        r#"{"timestamp":1767265200000,"sessionId":"s1","project":"/work/api","display":"now run tests"}"#,
        r#"{"timestamp":1767355200000,"sessionId":"s2","project":"/work/web","display":"hi"}"#,
        r#"{"timestamp":1767441600000,"sessionId":"s3","project":"/work/api"}"#,
    ];

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn fixture(root: &Path) -> Engine {
        write(root, "stats-cache.json", SNAPSHOT);
        write(root, "history.jsonl", &HISTORY.join("\n"));
        write(
            root,
            "projects/-work-api/a.jsonl",
            concat!(
                r#"{"message":{"content":[{"type":"tool_use","name":"Read"},{"type":"text","text":"x"}]}}"#,
                "\n",
                r#"{"message":{"content":[{"type":"tool_use","name":"Grep"},{"type":"tool_use","name":"Read"}]}}"#,
                "\n",
                r#"{"message":{"content":"plain string"}}"#,
            ),
        );
        write(
            root,
            "projects/-work-web/b.jsonl",
            r#"{"message":{"content":[{"type":"tool_use","name":"Edit"}]}}"#,
        );
        Engine::new(ClaudePaths::new(root.to_path_buf()))
            .with_timezone(Timezone::Named(chrono_tz::UTC))
            .with_today(NaiveDate::from_ymd_opt(2026, 1, 3).unwrap())
    }

    #[test]
    fn overview_report() {
        let dir = tempfile::tempdir().unwrap();
        let engine = fixture(dir.path());
        let overview = engine.overview().unwrap();

        assert_eq!(overview.total_sessions, 3);
        assert_eq!(overview.total_messages, Some(321));
        assert_eq!(overview.total_prompts, 4);
        assert_eq!(overview.total_input, 2_000_000);
        assert_eq!(overview.total_output, 80_000);
        assert_eq!(overview.total_cache_read, 4_000_000);
        assert_eq!(overview.total_cache_write, 1_000_000);
        // opus: 15 + 1.5 + 1.5 = 18.00; sonnet: 3 + 0.9 + 0.9 + 3.75 = 8.55
        assert_eq!(overview.model_costs["claude-opus-4-5-20251101"], 18.0);
        assert_eq!(overview.model_costs["claude-sonnet-4-5-20250929"], 8.55);
        assert_eq!(overview.total_cost, 26.55);
        assert_eq!(overview.pro_subscription, 100.0);
        assert_eq!(overview.savings, 0.0);
        assert_eq!(overview.roi, 27);
        assert_eq!(overview.first_session.as_deref(), Some("2026-01-01T10:00:00.000Z"));
        assert_eq!(overview.last_session.as_deref(), Some("2026-01-03T12:00:00.000Z"));
        assert_eq!(overview.active_days, 3);
        assert!(overview.longest_session.is_some());
    }

    #[test]
    fn overview_json_uses_wire_names() {
        let dir = tempfile::tempdir().unwrap();
        let engine = fixture(dir.path());
        let json = serde_json::to_value(engine.overview().unwrap()).unwrap();
        assert_eq!(json["totalCacheWrite"], 1_000_000);
        assert_eq!(json["proSubscription"], 100.0);
        assert_eq!(
            json["modelUsage"]["claude-opus-4-5-20251101"]["cacheReadInputTokens"],
            1_000_000
        );
        assert_eq!(
            json["modelUsage"]["claude-opus-4-5-20251101"]["webSearchRequests"],
            2
        );
        assert_eq!(
            json["modelUsage"]["claude-opus-4-5-20251101"]["contextWindow"],
            200_000
        );
        assert_eq!(json["longestSession"]["sessionId"], "s1");
    }

    #[test]
    fn null_counters_do_not_fail_snapshot_queries() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "stats-cache.json",
            r#"{"modelUsage":{"claude-opus-4-5":{"inputTokens":1000000,"outputTokens":null}}}"#,
        );
        let engine = Engine::new(ClaudePaths::new(dir.path().to_path_buf()));
        let overview = engine.overview().unwrap();
        assert_eq!(overview.total_output, 0);
        assert_eq!(overview.total_input, 1_000_000);
        assert!(engine.models().is_ok());
        assert!(engine.cache().is_ok());
    }

    #[test]
    fn subscription_baseline_drives_savings() {
        let dir = tempfile::tempdir().unwrap();
        let engine = fixture(dir.path()).with_subscription_cost(20.0);
        let overview = engine.overview().unwrap();
        assert_eq!(overview.savings, 6.55);
        assert_eq!(overview.roi, 133);
    }

    #[test]
    fn daily_sums_to_total_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let engine = fixture(dir.path());
        let daily = engine.daily();
        let dates: Vec<String> = daily.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2026-01-01", "2026-01-02", "2026-01-03"]);
        assert_eq!(daily[0].prompts, 2);
        assert_eq!(daily[0].session_count, 1);
        let sum: u64 = daily.iter().map(|d| d.prompts).sum();
        assert_eq!(sum, engine.overview().unwrap().total_prompts);
    }

    #[test]
    fn heatmap_shape() {
        let dir = tempfile::tempdir().unwrap();
        let engine = fixture(dir.path());
        let heatmap = engine.heatmap();
        assert_eq!(heatmap.heatmap.len(), 7);
        assert!(heatmap.heatmap.iter().all(|row| row.hours.len() == 24));
        assert_eq!(heatmap.heatmap[0].day, "Sun");
        // 2026-01-01 is a Thursday
        assert_eq!(heatmap.heatmap[4].hours[10].count, 1);
        assert_eq!(heatmap.heatmap[4].hours[11].count, 1);
        assert_eq!(heatmap.max_count, 1);
    }

    #[test]
    fn empty_store_degrades_activity_views() {
        let dir = tempfile::tempdir().unwrap();
        let engine = Engine::new(ClaudePaths::new(dir.path().join("missing")));
        assert!(engine.daily().is_empty());
        assert!(engine.projects().is_empty());
        assert_eq!(engine.heatmap().max_count, 1);
        assert!(engine.tools().tools.is_empty());
        assert!(matches!(engine.overview(), Err(AppError::SnapshotRead { .. })));
        assert!(engine.insights().is_err());
        assert!(engine.cache().is_err());
        assert!(engine.models().is_err());
    }

    #[test]
    fn insights_report() {
        let dir = tempfile::tempdir().unwrap();
        let engine = fixture(dir.path());
        let insights = engine.insights().unwrap();
        assert_eq!(insights.streaks.current, 3);
        assert_eq!(insights.streaks.longest, 3);
        let best = insights.streaks.best_day.unwrap();
        assert_eq!(best.date.to_string(), "2026-01-01");
        assert_eq!(insights.productivity.active_days, 3);
        assert_eq!(insights.productivity.total_days_span, 4);
        assert_eq!(insights.prompts.total, 4);
        assert_eq!(insights.prompts.max_length, 13);
        assert_eq!(insights.fun_stats.words_written, 60_000);
        assert_eq!(insights.fun_stats.books_equivalent, 0.8);
    }

    #[test]
    fn cache_report() {
        let dir = tempfile::tempdir().unwrap();
        let engine = fixture(dir.path());
        let cache = engine.cache().unwrap();
        assert_eq!(cache.cache_read, 4_000_000);
        assert_eq!(cache.cache_write, 1_000_000);
        assert_eq!(cache.hit_rate, 80);
        // opus (15 - 1.5) + sonnet 3 × (3 - 0.3)
        assert_eq!(cache.savings, 21.6);
        assert_eq!(cache.efficiency.fresh_tokens, 2_000_000);
        assert_eq!(cache.efficiency.cached_tokens, 4_000_000);
        assert_eq!(cache.efficiency.ratio, 2.0);
    }

    #[test]
    fn projects_descending() {
        let dir = tempfile::tempdir().unwrap();
        let engine = fixture(dir.path());
        let projects = engine.projects();
        assert_eq!(
            projects,
            vec![
                ProjectCount {
                    name: "api".to_string(),
                    prompts: 3
                },
                ProjectCount {
                    name: "web".to_string(),
                    prompts: 1
                },
            ]
        );
    }

    #[test]
    fn tools_report() {
        let dir = tempfile::tempdir().unwrap();
        let engine = fixture(dir.path());
        let tools = engine.tools();
        assert_eq!(tools.tools[0].name, "Read");
        assert_eq!(tools.tools[0].count, 2);
        assert_eq!(tools.read_write_ratio.read, 3);
        assert_eq!(tools.read_write_ratio.write, 1);
        let json = serde_json::to_value(&tools).unwrap();
        assert_eq!(json["exploringVsBuilding"], "exploring");
        assert_eq!(json["readWriteRatio"]["read"], 3);
    }

    #[test]
    fn models_by_output_share() {
        let dir = tempfile::tempdir().unwrap();
        let engine = fixture(dir.path());
        let models = engine.models().unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].full_name, "claude-sonnet-4-5-20250929");
        assert_eq!(models[0].name, "Sonnet 4.5");
        assert_eq!(models[0].percentage, 75);
        assert_eq!(models[0].cost, 8.55);
        assert_eq!(models[1].name, "Opus 4.5");
        assert_eq!(models[1].percentage, 25);
        assert_eq!(models[1].input_tokens, 1_000_000);
    }

    #[test]
    fn models_with_equal_output_keep_snapshot_order() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "stats-cache.json",
            r#"{"modelUsage":{
                "claude-sonnet-4-5":{"outputTokens":10},
                "claude-haiku-4-5":{"outputTokens":30},
                "claude-opus-4-5":{"outputTokens":10}
            }}"#,
        );
        let engine = Engine::new(ClaudePaths::new(dir.path().to_path_buf()));
        let names: Vec<String> = engine
            .models()
            .unwrap()
            .into_iter()
            .map(|m| m.full_name)
            .collect();
        assert_eq!(
            names,
            ["claude-haiku-4-5", "claude-sonnet-4-5", "claude-opus-4-5"]
        );
    }

    #[test]
    fn models_with_no_output_report_zero_share() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "stats-cache.json",
            r#"{"modelUsage":{"claude-haiku-4-5":{"inputTokens":5}}}"#,
        );
        let engine = Engine::new(ClaudePaths::new(dir.path().to_path_buf()));
        let models = engine.models().unwrap();
        assert_eq!(models[0].percentage, 0);
        assert_eq!(models[0].name, "Haiku 4.5");
    }

    #[test]
    fn repeated_queries_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let engine = fixture(dir.path());
        let run = |engine: &Engine| {
            serde_json::json!({
                "overview": engine.overview().unwrap(),
                "daily": engine.daily(),
                "heatmap": engine.heatmap(),
                "insights": engine.insights().unwrap(),
                "cache": engine.cache().unwrap(),
                "projects": engine.projects(),
                "tools": engine.tools(),
                "models": engine.models().unwrap(),
            })
        };
        assert_eq!(run(&engine), run(&engine));
    }

    #[test]
    fn malformed_lines_are_as_if_absent() {
        let clean = tempfile::tempdir().unwrap();
        let noisy = tempfile::tempdir().unwrap();
        let clean_engine = fixture(clean.path());
        let noisy_engine = fixture(noisy.path());

        let mut lines = Vec::new();
        for (i, line) in HISTORY.iter().enumerate() {
            lines.push((*line).to_string());
            if i % 2 == 1 {
                lines.push("{\"timestamp\": 17672".to_string());
            }
        }
        // every third line is garbage
        assert_eq!(lines.len(), 6);
        assert!(lines[2].starts_with("{\"timestamp\": 17672"));
        write(noisy.path(), "history.jsonl", &lines.join("\n"));
        write(
            noisy.path(),
            "projects/-work-web/b.jsonl",
            concat!(
                r#"{"message":{"content":[{"type":"tool_use","name":"Edit"}]}}"#,
                "\n{not json\n",
            ),
        );

        let as_json = |engine: &Engine| {
            serde_json::json!({
                "daily": engine.daily(),
                "heatmap": engine.heatmap(),
                "projects": engine.projects(),
                "tools": engine.tools(),
                "insights": engine.insights().unwrap(),
            })
        };
        assert_eq!(as_json(&clean_engine), as_json(&noisy_engine));
    }
}
