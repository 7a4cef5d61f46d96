use std::sync::Arc;

use crate::domain::item::expiry::{ExpiryBucket, ExpiryClassifier};
use crate::domain::item::use_cases::get_expiry_overview::{
    BucketCounts, ClassifiedItem, ExpiryOverview, GetExpiryOverviewParams,
    GetExpiryOverviewUseCase,
};
use crate::domain::logger::Logger;

pub struct GetExpiryOverviewUseCaseImpl {
    pub classifier: Arc<ExpiryClassifier>,
    pub logger: Arc<dyn Logger>,
}

impl GetExpiryOverviewUseCase for GetExpiryOverviewUseCaseImpl {
    fn execute(&self, params: GetExpiryOverviewParams) -> ExpiryOverview {
        let total = params.items.len();
        let normalizer = self.classifier.normalizer();
        let mut counts = BucketCounts::default();

        let mut items: Vec<ClassifiedItem> = params
            .items
            .into_iter()
            .filter(|item| params.filter.matches_item(item))
            .map(|item| {
                let expiry = self.classifier.classify(item.expiry_date.as_ref());
                let added_day = normalizer.to_calendar_day_string(item.added_date.as_ref());
                let consumed_day = item
                    .consumed_date
                    .as_ref()
                    .map(|date| normalizer.to_calendar_day_string(Some(date)));
                ClassifiedItem {
                    item,
                    expiry,
                    added_day,
                    consumed_day,
                }
            })
            .inspect(|classified| counts.record(classified.expiry.bucket))
            .filter(|classified| params.filter.matches_bucket(classified.expiry.bucket))
            .collect();

        items.sort_by(|a, b| {
            let key = |c: &ClassifiedItem| {
                (
                    c.expiry.bucket == ExpiryBucket::Unknown,
                    c.expiry.days_until_expiry,
                )
            };
            key(a)
                .cmp(&key(b))
                .then_with(|| a.item.name.cmp(&b.item.name))
        });

        self.logger.debug(&format!(
            "Expiry overview: {} of {} items listed (expired={}, urgent={}, soon={}, safe={}, unknown={})",
            items.len(),
            total,
            counts.expired,
            counts.urgent,
            counts.soon,
            counts.safe,
            counts.unknown
        ));

        ExpiryOverview { items, counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::date_input::DateInput;
    use crate::domain::calendar::model::LocalZone;
    use crate::domain::calendar::normalizer::DateNormalizer;
    use crate::domain::item::filter::ItemFilter;
    use crate::domain::item::model::InventoryItem;
    use crate::domain::item::value_objects::ItemStatus;
    use crate::domain::product::category::FoodCategory;
    use crate::domain::shared::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn use_case() -> GetExpiryOverviewUseCaseImpl {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        let normalizer = Arc::new(DateNormalizer::new(
            LocalZone::utc(),
            Arc::new(FixedClock(now)),
            mock_logger(),
        ));
        GetExpiryOverviewUseCaseImpl {
            classifier: Arc::new(ExpiryClassifier::new(normalizer)),
            logger: mock_logger(),
        }
    }

    fn item(name: &str, expiry: Option<&str>, status: ItemStatus) -> InventoryItem {
        InventoryItem {
            id: format!("doc-{}", name),
            name: name.to_string(),
            category: FoodCategory::Dairy,
            storage_id: Some("main".to_string()),
            expiry_date: expiry.map(DateInput::from),
            added_date: Some(DateInput::from("2024-01-01T09:00:00Z")),
            consumed_date: None,
            status,
        }
    }

    fn pantry() -> Vec<InventoryItem> {
        vec![
            item("Tofu", None, ItemStatus::Available),
            item("Yogurt", Some("2024-01-20"), ItemStatus::Available),
            item("Milk", Some("2024-01-09"), ItemStatus::Available),
            item("Cheese", Some("2024-01-12"), ItemStatus::Available),
            item("Butter", Some("2024-01-15"), ItemStatus::Available),
        ]
    }

    #[test]
    fn should_sort_by_days_until_expiry_with_unknown_last() {
        let overview = use_case().execute(GetExpiryOverviewParams {
            items: pantry(),
            filter: ItemFilter::default(),
        });

        let names: Vec<&str> = overview.items.iter().map(|c| c.item.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Cheese", "Butter", "Yogurt", "Tofu"]);
        assert_eq!(overview.items[0].expiry.badge.as_deref(), Some("D+1"));
        assert_eq!(overview.items[0].added_day, "2024-01-01");
    }

    #[test]
    fn should_count_every_bucket() {
        let overview = use_case().execute(GetExpiryOverviewParams {
            items: pantry(),
            filter: ItemFilter::default(),
        });

        assert_eq!(
            overview.counts,
            BucketCounts {
                expired: 1,
                urgent: 1,
                soon: 1,
                safe: 1,
                unknown: 1,
            }
        );
    }

    #[test]
    fn should_list_unknown_items_under_safe_filter() {
        let overview = use_case().execute(GetExpiryOverviewParams {
            items: pantry(),
            filter: ItemFilter {
                bucket: Some(ExpiryBucket::Safe),
                ..Default::default()
            },
        });

        let names: Vec<&str> = overview.items.iter().map(|c| c.item.name.as_str()).collect();
        assert_eq!(names, vec!["Yogurt", "Tofu"]);
        assert_eq!(overview.counts.expired, 1);
    }

    #[test]
    fn should_skip_finished_items_and_report_consumed_day() {
        let mut eaten = item("Pudding", Some("2024-01-11"), ItemStatus::Consumed);
        eaten.consumed_date = Some(DateInput::Timestamp {
            seconds: 1704844800,
            nanos: 0,
        });

        let default_view = use_case().execute(GetExpiryOverviewParams {
            items: vec![eaten.clone()],
            filter: ItemFilter::default(),
        });
        assert!(default_view.items.is_empty());

        let history = use_case().execute(GetExpiryOverviewParams {
            items: vec![eaten],
            filter: ItemFilter {
                include_finished: true,
                ..Default::default()
            },
        });
        assert_eq!(history.items[0].consumed_day.as_deref(), Some("2024-01-10"));
    }
}
