use crate::schema::QuickJumpConfig;

use super::helpers::validate_range;

pub(crate) fn validate_picker(errors: &mut Vec<String>, config: &QuickJumpConfig) {
    validate_range(
        errors,
        "picker.max_results",
        config.picker.max_results,
        1,
        200,
    );
}
