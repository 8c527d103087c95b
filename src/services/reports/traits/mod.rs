pub mod report_trait;
