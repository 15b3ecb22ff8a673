// src/cli/grab.rs - Download anything: picks yt-dlp, wget or curl from the URL

use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::infra::config::GrabConfig;
use crate::infra::errors::BrightsideError;
use crate::infra::process;

/// Result of looking at the URL alone, before any network request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlKind {
    /// Hosted on a video platform yt-dlp understands.
    Video,
    /// Path ends in a file name with an extension (without the dot).
    File(String),
    /// Needs a HEAD request to tell a web page from anything else.
    Unknown,
}

pub fn classify_url(url: &Url, video_hosts: &[String]) -> UrlKind {
    if let Some(host) = url.host_str() {
        let host = host.to_ascii_lowercase();
        let on_platform = video_hosts.iter().any(|h| {
            let h = h.to_ascii_lowercase();
            host == h || host.ends_with(&format!(".{h}"))
        });
        if on_platform {
            return UrlKind::Video;
        }
    }

    let last_segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or("");
    match last_segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => UrlKind::File(ext.to_string()),
        _ => UrlKind::Unknown,
    }
}

fn is_html(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("text/html")
}

async fn is_web_page(url: &Url) -> bool {
    let resp = match reqwest::Client::new().head(url.as_str()).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::debug!(error = %e, "HEAD request failed");
            return false;
        }
    };
    resp.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(is_html)
        .unwrap_or(false)
}

/// `brightside grab <url>`
pub async fn run_grab(url: &str, config: &GrabConfig) -> anyhow::Result<()> {
    println!("🔍 Detecting file type...");

    let parsed = match Url::parse(url) {
        Ok(u) => u,
        Err(e) => {
            println!("❌ Invalid URL '{url}': {e}");
            return Ok(());
        }
    };

    match classify_url(&parsed, &config.video_hosts) {
        UrlKind::Video => {
            println!("🎥 Detected Video Platform! Using yt-dlp...");
            report(
                download_video(url, config).await,
                &format!(
                    "Download complete! Saved in {}",
                    config.download_dir().display()
                ),
                "Failed to download video",
            );
        }
        UrlKind::File(ext) => {
            println!("📂 Detected File Download! File Type: .{ext}");
            report(
                download_file(url).await,
                "Download complete!",
                "Failed to download file",
            );
        }
        UrlKind::Unknown => {
            if is_web_page(&parsed).await {
                println!("🌍 Detected Webpage! Saving for offline use...");
                report(
                    download_file(url).await,
                    "Download complete!",
                    "Failed to download file",
                );
            } else {
                println!("📡 Unknown type. Attempting to download...");
                report(
                    process::run_inherited("curl", &["-O", url]).await,
                    "Download complete!",
                    "Failed to download",
                );
            }
        }
    }

    Ok(())
}

async fn download_video(url: &str, config: &GrabConfig) -> Result<(), BrightsideError> {
    let template = config.download_dir().join("%(title)s.%(ext)s");
    let template = template.to_string_lossy();
    process::run_inherited("yt-dlp", &["-f", config.video_format.as_str(), "-o", template.as_ref(), url]).await
}

/// wget with resume, or curl when wget is not installed.
async fn download_file(url: &str) -> Result<(), BrightsideError> {
    if process::command_exists("wget") {
        process::run_inherited("wget", &["-c", url]).await
    } else {
        tracing::debug!("wget not found, using curl");
        process::run_inherited("curl", &["-O", url]).await
    }
}

fn report(result: Result<(), BrightsideError>, success: &str, failure: &str) {
    match result {
        Ok(()) => println!("✅ {success}"),
        Err(e) => {
            tracing::warn!(error = %e, "{failure}");
            println!("❌ {failure}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts() -> Vec<String> {
        GrabConfig::default().video_hosts
    }

    fn classify(url: &str) -> UrlKind {
        classify_url(&Url::parse(url).unwrap(), &hosts())
    }

    #[test]
    fn test_video_platforms() {
        assert_eq!(classify("https://www.youtube.com/watch?v=abc"), UrlKind::Video);
        assert_eq!(classify("https://youtu.be/abc"), UrlKind::Video);
        assert_eq!(classify("https://m.tiktok.com/@user/video/1"), UrlKind::Video);
        assert_eq!(classify("https://WWW.YOUTUBE.COM/watch?v=x"), UrlKind::Video);
    }

    #[test]
    fn test_lookalike_host_is_not_video() {
        assert_ne!(classify("https://notyoutube.com/page"), UrlKind::Video);
    }

    #[test]
    fn test_file_extension_from_path() {
        assert_eq!(
            classify("https://example.com/files/report.pdf"),
            UrlKind::File("pdf".into())
        );
        assert_eq!(
            classify("https://cdn.example.com/a/b/photo.jpg?size=large"),
            UrlKind::File("jpg".into())
        );
    }

    #[test]
    fn test_domain_suffix_is_not_an_extension() {
        assert_eq!(classify("https://example.com"), UrlKind::Unknown);
        assert_eq!(classify("https://example.com/"), UrlKind::Unknown);
        assert_eq!(classify("https://example.com/articles/latest"), UrlKind::Unknown);
    }

    #[test]
    fn test_dotfile_is_not_an_extension() {
        assert_eq!(classify("https://example.com/.well-known"), UrlKind::Unknown);
    }

    #[test]
    fn test_custom_hosts() {
        let url = Url::parse("https://vimeo.com/123").unwrap();
        assert_eq!(classify_url(&url, &["vimeo.com".into()]), UrlKind::Video);
        assert_eq!(classify_url(&url, &[]), UrlKind::Unknown);
    }

    #[test]
    fn test_is_html() {
        assert!(is_html("text/html; charset=utf-8"));
        assert!(is_html("Text/HTML"));
        assert!(!is_html("application/octet-stream"));
    }
}
