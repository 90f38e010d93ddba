use std::{fs, path::Path};

use markdown_sitegen_config::SiteConfig;

use crate::{
    html::RenderOptions,
    io::{clean_dir, copy_dir_recursive},
};

use super::{SiteError, Template, generate_page, generate_pages_recursive, page_targets};

/// What a build produced.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages_written: usize,
    pub assets_copied: usize,
    /// Pages that failed to convert. Only filled when the build keeps going
    /// past failures.
    pub failures: Vec<SiteError>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Builds the whole site described by `config`.
///
/// The static directory must exist and the output directory must not hold
/// any of the inputs. The output directory is emptied first
/// when `build.clean_output` is set, then static assets are copied and every
/// content page is generated. With `build.fail_fast` off, pages that fail to
/// convert are recorded in the report and the build carries on; I/O errors
/// always abort.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport, SiteError> {
    if !config.static_dir.is_dir() {
        return Err(SiteError::MissingStaticDir(config.static_dir.clone()));
    }
    check_output_is_separate(config)?;

    let output = config.output_dir.as_path();
    if config.build.clean_output {
        clean_dir(output).map_err(SiteError::io_at(output))?;
    } else {
        fs::create_dir_all(output).map_err(|source| SiteError::Io {
            path: output.to_path_buf(),
            source: source.into(),
        })?;
    }

    let mut report = BuildReport {
        assets_copied: copy_dir_recursive(&config.static_dir, output)
            .map_err(SiteError::io_at(&config.static_dir))?,
        ..BuildReport::default()
    };

    let template = Template::load(&config.template_path)?;
    let options = RenderOptions {
        escape_attributes: config.render.escape_attributes,
    };

    if config.build.fail_fast {
        report.pages_written =
            generate_pages_recursive(&config.content_dir, &template, output, &options)?;
    } else {
        for target in page_targets(&config.content_dir, output)? {
            match generate_page(&target.source, &template, &target.dest, &options) {
                Ok(()) => report.pages_written += 1,
                Err(e @ SiteError::Page { .. }) => {
                    log::warn!("{e}");
                    report.failures.push(e);
                }
                Err(e) => return Err(e),
            }
        }
    }

    log::info!(
        "Built site in {}: {} pages, {} assets, {} failures",
        output.display(),
        report.pages_written,
        report.assets_copied,
        report.failures.len()
    );
    Ok(report)
}

/// Rejects an output directory that is, or sits above, the content
/// directory, the static directory or the template.
fn check_output_is_separate(config: &SiteConfig) -> Result<(), SiteError> {
    // An output directory that does not exist yet cannot hold anything.
    let Ok(output) = config.output_dir.canonicalize() else {
        return Ok(());
    };

    let inputs: [&Path; 3] = [
        &config.content_dir,
        &config.static_dir,
        &config.template_path,
    ];
    for input in inputs {
        if let Ok(input) = input.canonicalize()
            && input.starts_with(&output)
        {
            return Err(SiteError::OutputOverlapsInput { output, input });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};
    use markdown_sitegen_config::BuildConfig;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tempfile::TempDir;

    fn site_fixture() -> TempDir {
        let dir = create_test_dir();
        create_test_file(&dir, "static/index.css", "body {}");
        create_test_file(&dir, "static/images/ring.png", "png");
        create_test_file(&dir, "template.html", "<title>{{ Title }}</title>{{ Content }}");
        create_test_file(&dir, "content/index.md", "# Home\n\n![ring](/images/ring.png)");
        create_test_file(&dir, "content/blog/first.md", "# First\n\n> quoted");
        dir
    }

    fn config_for(root: &Path) -> SiteConfig {
        SiteConfig::default().resolve_paths(root)
    }

    #[test]
    fn builds_pages_and_assets() {
        let dir = site_fixture();
        let config = config_for(dir.path());

        let report = build_site(&config).unwrap();

        assert_eq!(report.pages_written, 2);
        assert_eq!(report.assets_copied, 2);
        assert!(report.is_success());

        let public = dir.path().join("public");
        assert_eq!(
            fs::read_to_string(public.join("index.html")).unwrap(),
            "<title>Home</title><div><h1>Home</h1><p><img src=\"/images/ring.png\" alt=\"ring\"></img></p></div>"
        );
        assert_eq!(
            fs::read_to_string(public.join("blog/first.html")).unwrap(),
            "<title>First</title><div><h1>First</h1><blockquote>quoted</blockquote></div>"
        );
        assert_eq!(
            fs::read_to_string(public.join("images/ring.png")).unwrap(),
            "png"
        );
    }

    #[test]
    fn missing_static_dir_aborts() {
        let dir = create_test_dir();
        create_test_file(&dir, "content/index.md", "# Home");

        let err = build_site(&config_for(dir.path())).unwrap_err();

        assert!(matches!(err, SiteError::MissingStaticDir(_)));
        assert!(err.to_string().contains("static directory not found"));
        assert!(!dir.path().join("public").exists());
    }

    #[test]
    fn clean_output_removes_stale_files() {
        let dir = site_fixture();
        create_test_file(&dir, "public/stale.html", "old");

        build_site(&config_for(dir.path())).unwrap();

        assert!(!dir.path().join("public/stale.html").exists());
    }

    #[test]
    fn keeps_output_when_not_cleaning() {
        let dir = site_fixture();
        create_test_file(&dir, "public/keep.txt", "mine");
        let config = SiteConfig {
            build: BuildConfig {
                clean_output: false,
                fail_fast: true,
            },
            ..config_for(dir.path())
        };

        build_site(&config).unwrap();

        assert!(dir.path().join("public/keep.txt").exists());
        assert!(dir.path().join("public/index.html").exists());
    }

    #[test]
    fn fail_fast_stops_on_bad_page() {
        let dir = site_fixture();
        create_test_file(&dir, "content/broken.md", "No title here");

        let err = build_site(&config_for(dir.path())).unwrap_err();

        assert!(matches!(err, SiteError::Page { .. }));
    }

    #[test]
    fn keep_going_collects_failures() {
        let dir = site_fixture();
        create_test_file(&dir, "content/broken.md", "No title here");
        let config = SiteConfig {
            build: BuildConfig {
                clean_output: true,
                fail_fast: false,
            },
            ..config_for(dir.path())
        };

        let report = build_site(&config).unwrap();

        assert_eq!(report.pages_written, 2);
        assert_eq!(report.failures.len(), 1);
        assert!(!report.is_success());
        assert!(
            report.failures[0]
                .to_string()
                .contains("broken.md")
        );
        assert!(dir.path().join("public/index.html").exists());
        assert!(!dir.path().join("public/broken.html").exists());
    }

    #[test]
    fn output_above_inputs_is_rejected() {
        let dir = site_fixture();
        let config = SiteConfig {
            output_dir: dir.path().to_path_buf(),
            ..config_for(dir.path())
        };

        let err = build_site(&config).unwrap_err();

        assert!(matches!(err, SiteError::OutputOverlapsInput { .. }));
        assert!(dir.path().join("content/index.md").exists());
        assert!(dir.path().join("static/index.css").exists());
        assert!(dir.path().join("template.html").exists());
    }

    #[test]
    fn output_equal_to_an_input_is_rejected() {
        let dir = site_fixture();
        for input in ["content", "static"] {
            let config = SiteConfig {
                output_dir: dir.path().join(input),
                ..config_for(dir.path())
            };

            let err = build_site(&config).unwrap_err();

            assert!(
                matches!(&err, SiteError::OutputOverlapsInput { input: path, .. } if path.ends_with(input))
            );
        }
        assert!(dir.path().join("content/blog/first.md").exists());
        assert!(dir.path().join("static/images/ring.png").exists());
    }

    #[test]
    fn overlap_is_checked_without_cleaning() {
        let dir = site_fixture();
        let config = SiteConfig {
            output_dir: dir.path().join("content/../content"),
            build: BuildConfig {
                clean_output: false,
                fail_fast: true,
            },
            ..config_for(dir.path())
        };

        let err = build_site(&config).unwrap_err();

        assert!(matches!(err, SiteError::OutputOverlapsInput { .. }));
        assert!(!dir.path().join("content/index.html").exists());
    }

    #[test]
    fn missing_template_aborts() {
        let dir = site_fixture();
        fs::remove_file(dir.path().join("template.html")).unwrap();

        let err = build_site(&config_for(dir.path())).unwrap_err();

        assert!(matches!(err, SiteError::Template { .. }));
    }
}
