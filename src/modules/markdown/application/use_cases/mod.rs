pub mod preview_markdown;
