//! Translation from an [`OptionSet`] to an operation request.
//!
//! Each [`FetchOption`] variant has exactly one arm below. The match has
//! no wildcard, so a new option kind does not compile until it has a rule.

use ringkv_core::Location;

use crate::operation::OperationBuilder;
use crate::option::{FetchOption, OptionSet};

/// Build the request for `location` with `options` applied.
///
/// Bucket, key and bucket type are always set; each stored option then
/// calls its one setter. Kinds never share a field, so the result does
/// not depend on the order options were added in.
pub fn build_operation<B: OperationBuilder>(
    location: &Location,
    options: &OptionSet,
) -> B::Operation {
    let builder =
        B::new(location.bucket(), location.key()).with_bucket_type(location.bucket_type());

    options
        .iter()
        .fold(builder, |builder, option| apply_option(builder, option))
        .build()
}

/// Apply a single option to `builder`.
pub(crate) fn apply_option<B: OperationBuilder>(builder: B, option: &FetchOption) -> B {
    tracing::trace!(target: "ringkv::fetch", option = %option.kind(), "Applying fetch option");

    match option {
        FetchOption::R(quorum) => builder.with_r(quorum.int_value()),
        FetchOption::Pr(quorum) => builder.with_pr(quorum.int_value()),
        FetchOption::NVal(n_val) => builder.with_n_val(*n_val),
        FetchOption::Timeout(timeout_ms) => builder.with_timeout(*timeout_ms),
        FetchOption::DeletedVClock(enabled) => builder.with_return_deleted_vclock(*enabled),
        FetchOption::Head(enabled) => builder.with_head_only(*enabled),
        FetchOption::BasicQuorum(enabled) => builder.with_basic_quorum(*enabled),
        FetchOption::IfModified(vclock) => {
            builder.with_if_not_modified(vclock.as_bytes().to_vec())
        }
        FetchOption::SloppyQuorum(enabled) => builder.with_sloppy_quorum(*enabled),
        FetchOption::NotFoundOk(enabled) => builder.with_notfound_ok(*enabled),
    }
}
