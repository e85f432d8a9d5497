//! Stable 32-bit hash codes, the same values the service's JVM models produce.
//!
//! `Hash` is what maps and sets use. `hash_code()` exists for callers that
//! need to agree with those other clients, e.g. when sharding work by request.

use chrono::{DateTime, Utc};

pub trait HashCode {
    fn hash_code(&self) -> i32;
}

/// Folds field hashes as `31 * h + x`, starting from 1.
pub(crate) fn hash_combine(hashes: &[i32]) -> i32 {
    hashes.iter().fold(1i32, |h, x| h.wrapping_mul(31).wrapping_add(*x))
}

impl HashCode for str {
    fn hash_code(&self) -> i32 {
        self.encode_utf16().fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(i32::from(c)))
    }
}

impl HashCode for String {
    fn hash_code(&self) -> i32 {
        self.as_str().hash_code()
    }
}

impl HashCode for i32 {
    fn hash_code(&self) -> i32 {
        *self
    }
}

impl HashCode for bool {
    fn hash_code(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl HashCode for DateTime<Utc> {
    fn hash_code(&self) -> i32 {
        let millis = self.timestamp_millis();
        let folded = millis ^ (((millis as u64) >> 32) as i64);
        folded as i32
    }
}

impl<T: HashCode> HashCode for Option<T> {
    fn hash_code(&self) -> i32 {
        self.as_ref().map_or(0, HashCode::hash_code)
    }
}

impl<T: HashCode> HashCode for Vec<T> {
    fn hash_code(&self) -> i32 {
        hash_combine(&self.iter().map(HashCode::hash_code).collect::<Vec<_>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DescribeAutoScalingGroupsRequest, MetricStatistic, StepAdjustment, Tag};
    use chrono::TimeZone;

    #[test]
    fn scalars() {
        assert_eq!("hello".hash_code(), 99162322);
        assert_eq!("".hash_code(), 0);
        assert_eq!("Name".to_string().hash_code(), 2420395);
        assert_eq!(42i32.hash_code(), 42);
        assert_eq!(true.hash_code(), 1231);
        assert_eq!(false.hash_code(), 1237);
        assert_eq!(None::<String>.hash_code(), 0);
        assert_eq!(Utc.timestamp_millis_opt(1_000).unwrap().hash_code(), 1_000);
        assert_eq!(MetricStatistic::Average.hash_code(), "Average".hash_code());
    }

    #[test]
    fn lists_fold_from_one() {
        assert_eq!(Vec::<String>::new().hash_code(), 1);
        assert_eq!(vec!["a".to_string(), "b".to_string()].hash_code(), 4066);
    }

    #[test]
    fn models_fold_fields_in_declaration_order() {
        let tag = Tag::default().with_key("Name").with_value("web");
        assert_eq!(tag.hash_code(), -1936693322);
        assert_eq!(tag.clone().with_propagate_at_launch(true).hash_code(), -1936692091);
        assert_eq!(Tag::default().hash_code(), 28629151);

        // absent and empty lists hash differently
        let mut request = DescribeAutoScalingGroupsRequest::default();
        let empty = request.hash_code();
        request.set_auto_scaling_group_names(None);
        assert_ne!(request.hash_code(), empty);
    }

    #[test]
    fn equal_values_have_equal_hash_codes() {
        let step = || StepAdjustment::default().with_metric_interval_lower_bound(40.0);
        assert_eq!(step(), step());
        assert_eq!(step().hash_code(), step().hash_code());
    }
}
