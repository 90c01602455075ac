//! End-to-end suite for the raw bitmap viewer.

#[cfg(test)]
mod frame_sanity;

#[cfg(test)]
mod navigation_e2e;

#[cfg(test)]
mod tests {
    use app::Viewer;
    use pixel_codec::{Rgba, SENTINEL_BYTE};
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use world::{Intent, World};

    pub(crate) fn rom(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp rom");
        file.write_all(bytes).expect("write temp rom");
        file
    }

    pub(crate) fn viewer_for(file: &NamedTempFile, setup: &[Intent]) -> Viewer {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut viewer = Viewer::new(World::new());
        viewer
            .apply(Intent::SetPath(Some(file.path().to_path_buf())))
            .expect("open rom");
        for intent in setup {
            viewer.apply(intent.clone()).expect("setup intent");
        }
        viewer
    }

    #[test]
    fn two_gray_pixels_from_file() {
        let file = rom(&[0x7F, 0xAA]);
        let viewer = viewer_for(
            &file,
            &[
                Intent::SetColumns(2),
                Intent::SetRows(1),
                Intent::SetBytesPerPixel(1),
            ],
        );

        assert_eq!(
            viewer.frame().pixels(),
            &[Rgba::opaque(127, 127, 127), Rgba::opaque(170, 170, 170)]
        );
    }

    #[test]
    fn zero_columns_decodes_nothing() {
        let file = rom(&[0x7F, 0xAA]);
        let viewer = viewer_for(
            &file,
            &[
                Intent::SetBytesPerPixel(1),
                Intent::SetRows(1),
                Intent::SetColumns(0),
            ],
        );

        assert!(viewer.frame().is_empty());
        assert_eq!(viewer.canvas().width(), 2);
    }

    #[test]
    fn window_past_end_of_file_is_sentinel() {
        let file = rom(&[1, 2, 3]);
        let viewer = viewer_for(
            &file,
            &[
                Intent::SetColumns(4),
                Intent::SetRows(2),
                Intent::SetBytesPerPixel(1),
                Intent::SetOffset(1),
            ],
        );

        let mut expected = vec![2, 3];
        expected.resize(8, SENTINEL_BYTE);
        assert_eq!(viewer.frame().raw(), expected.as_slice());
    }
}
