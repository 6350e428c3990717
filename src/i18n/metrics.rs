//! Translation metrics and observability module.
//!
//! This module tracks catalog lookups (hits and misses) and how often a
//! locale was installed process-wide.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Translation lookup counters.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of lookups answered by a catalog (or by the canonical locale)
    hits: AtomicUsize,

    /// Number of lookups that fell back to the key
    misses: AtomicUsize,

    /// Number of locale installations
    installs: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Create a standalone set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the global translation metrics instance.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(TranslationMetrics::new)
    }

    /// Record a lookup that found a translation.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back to the key.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a locale installation.
    pub fn record_install(&self) {
        self.installs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn installs(&self) -> usize {
        self.installs.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let misses = self.misses();
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            misses,
            hit_rate,
            installs: self.installs(),
        }
    }
}

/// Metrics report containing current translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of lookups answered by a catalog
    pub hits: usize,

    /// Number of lookups that fell back to the key
    pub misses: usize,

    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,

    /// Number of locale installations
    pub installs: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_hit() {
        let metrics = TranslationMetrics::new();

        assert_eq!(metrics.hits(), 0);
        metrics.record_hit();
        assert_eq!(metrics.hits(), 1);
        metrics.record_hit();
        assert_eq!(metrics.hits(), 2);
    }

    #[test]
    fn test_record_miss() {
        let metrics = TranslationMetrics::new();

        assert_eq!(metrics.misses(), 0);
        metrics.record_miss();
        assert_eq!(metrics.misses(), 1);
    }

    #[test]
    fn test_record_install() {
        let metrics = TranslationMetrics::new();
        metrics.record_install();
        assert_eq!(metrics.installs(), 1);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = TranslationMetrics::new().report();

        assert_eq!(report.hits, 0);
        assert_eq!(report.misses, 0);
        assert_eq!(report.hit_rate, 0.0);
        assert_eq!(report.installs, 0);
    }

    #[test]
    fn test_report_hit_rate() {
        let metrics = TranslationMetrics::new();

        // 3 hits, 1 miss = 75% hit rate
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_hit();
        metrics.record_miss();

        let report = metrics.report();
        assert_eq!(report.hits, 3);
        assert_eq!(report.misses, 1);
        assert_eq!(report.hit_rate, 75.0);
    }

    #[test]
    fn test_report_all_misses() {
        let metrics = TranslationMetrics::new();
        metrics.record_miss();
        metrics.record_miss();

        assert_eq!(metrics.report().hit_rate, 0.0);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = TranslationMetrics::new();
        metrics.record_hit();

        let json = serde_json::to_value(metrics.report()).expect("Should serialize");
        assert_eq!(json["hits"], 1);
        assert_eq!(json["hit_rate"], 100.0);
    }

    // ==================== Singleton Tests ====================

    #[test]
    fn test_global_returns_same_instance() {
        let metrics1 = TranslationMetrics::global();
        let metrics2 = TranslationMetrics::global();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(metrics1, metrics2));
    }

    #[test]
    fn test_metrics_persist_across_calls() {
        let metrics1 = TranslationMetrics::global();
        let initial = metrics1.installs();
        metrics1.record_install();

        let metrics2 = TranslationMetrics::global();
        assert!(metrics2.installs() > initial);
    }
}
