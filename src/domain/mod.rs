// Domain layer: core models shared across the pipeline. No IO here.

pub mod model;
