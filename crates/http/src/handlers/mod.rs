pub(crate) mod dedupe;
