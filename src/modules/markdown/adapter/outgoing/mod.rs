pub mod comrak_renderer;
