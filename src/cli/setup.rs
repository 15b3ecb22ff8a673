// src/cli/setup.rs - Install dependencies and wire Brightside into the shell
//
// Straight-line orchestration of package managers and git. Each step reports
// its own outcome; a failed step does not stop the ones after it.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::infra::config::SetupConfig;
use crate::infra::errors::BrightsideError;
use crate::infra::paths;
use crate::infra::process;

const HOMEBREW_INSTALL: &str =
    "$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)";
const OH_MY_ZSH_INSTALL: &str =
    "curl -fsSL https://raw.githubusercontent.com/ohmyzsh/ohmyzsh/master/tools/install.sh | bash";
const POWERLEVEL10K_REPO: &str = "https://github.com/romkatv/powerlevel10k.git";
const ZSH_PLUGINS: [(&str, &str); 2] = [
    (
        "zsh-autosuggestions",
        "https://github.com/zsh-users/zsh-autosuggestions",
    ),
    (
        "zsh-syntax-highlighting",
        "https://github.com/zsh-users/zsh-syntax-highlighting",
    ),
];

pub const PATH_EXPORT: &str = "export PATH=\"/usr/local/bin:$PATH\"";

/// rc file for the user's login shell, from the value of `$SHELL`.
pub fn shell_rc_file(shell: &str, home: &Path) -> Option<PathBuf> {
    if shell.contains("zsh") {
        Some(home.join(".zshrc"))
    } else if shell.contains("bash") {
        Some(home.join(".bashrc"))
    } else {
        None
    }
}

pub fn missing_packages(packages: &[String], installed: impl Fn(&str) -> bool) -> Vec<String> {
    packages
        .iter()
        .filter(|pkg| !installed(pkg.as_str()))
        .cloned()
        .collect()
}

/// Append `line` unless the file already contains it. Returns whether it wrote.
pub fn append_line_if_missing(path: &Path, line: &str) -> Result<bool, BrightsideError> {
    let existing = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    if existing.lines().any(|l| l.trim() == line) {
        return Ok(false);
    }
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    write!(file, "\n{line}\n")?;
    Ok(true)
}

/// Everything `--reset` deletes, binary first.
pub fn reset_targets(config: &SetupConfig, home: &Path) -> Vec<PathBuf> {
    vec![
        PathBuf::from(&config.install_path),
        home.join(".oh-my-zsh"),
        home.join(".p10k.zsh"),
        home.join(".zshrc"),
    ]
}

fn confirm(prompt: &str, silent: bool) -> bool {
    if silent {
        return true;
    }
    inquire::Confirm::new(prompt)
        .with_default(true)
        .prompt()
        .unwrap_or(false)
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

/// `brightside setup [--reset] [--silent]`
pub async fn run_setup(reset: bool, silent: bool, config: &SetupConfig) -> anyhow::Result<()> {
    println!("🚀 Running Brightside Setup...\n");

    if reset {
        reset_installation(config, silent);
    }

    match std::env::consts::OS {
        "macos" => {
            println!("🍏 macOS detected!");
            install_mac_dependencies(config, silent).await;
        }
        "linux" => {
            println!("🐧 Linux detected!");
            install_linux_dependencies(config, silent).await?;
        }
        other => anyhow::bail!("Unsupported OS: {other}"),
    }

    install_shell_theme(silent).await;
    install_binary(config).await;
    configure_shell();

    println!("\n✅ Setup Complete! Run 'brightside --help' to get started.");
    Ok(())
}

async fn install_mac_dependencies(config: &SetupConfig, silent: bool) {
    println!("🔹 Checking for Homebrew...");
    if !process::command_exists("brew") {
        println!("🍺 Homebrew not found! Installing...");
        report(
            process::run_inherited("/bin/bash", &["-c", HOMEBREW_INSTALL]).await,
            "Homebrew installed",
            "Failed to install Homebrew",
        );
    }
    install_packages("brew", &["install"], &config.mac_packages, silent).await;
}

async fn install_linux_dependencies(config: &SetupConfig, silent: bool) -> anyhow::Result<()> {
    println!("🔹 Checking for APT...");
    if !process::command_exists("apt") {
        anyhow::bail!("APT package manager not found! Make sure you're on a Debian-based system.");
    }
    install_packages("sudo", &["apt", "install", "-y"], &config.linux_packages, silent).await;
    Ok(())
}

async fn install_packages(program: &str, base_args: &[&str], packages: &[String], silent: bool) {
    let missing = missing_packages(packages, process::command_exists);
    if missing.is_empty() {
        println!("✅ All packages already installed.");
        return;
    }
    if !confirm(&format!("Install {}?", missing.join(", ")), silent) {
        println!("⏭ Skipping package installation.");
        return;
    }

    for pkg in &missing {
        println!("🔹 Installing {pkg}...");
        let mut args = base_args.to_vec();
        args.push(pkg.as_str());
        report(
            process::run_inherited(program, &args).await,
            &format!("{pkg} installed"),
            &format!("Failed to install {pkg}"),
        );
    }
}

async fn install_shell_theme(silent: bool) {
    println!("🎨 Checking Oh My Zsh & Powerlevel10k installation...");

    if paths::oh_my_zsh_dir().exists() {
        println!("✅ Oh My Zsh is already installed.");
    } else {
        println!("⚡ Installing Oh My Zsh...");
        let result = if silent {
            process::run_detached_stdin("/bin/bash", &["-c", OH_MY_ZSH_INSTALL]).await
        } else {
            process::run_inherited("/bin/bash", &["-c", OH_MY_ZSH_INSTALL]).await
        };
        if let Err(e) = result {
            println!("❌ Failed to install Oh My Zsh: {e}");
            return;
        }
    }

    let custom = paths::zsh_custom_dir();
    let p10k = custom.join("themes").join("powerlevel10k");
    if p10k.exists() {
        println!("✅ Powerlevel10k is already installed.");
    } else {
        println!("🎨 Installing Powerlevel10k...");
        git_clone(POWERLEVEL10K_REPO, &p10k, &["--depth=1"]).await;
    }

    let plugin_dir = custom.join("plugins");
    if let Err(e) = std::fs::create_dir_all(&plugin_dir) {
        println!("❌ Could not create {}: {e}", plugin_dir.display());
        return;
    }
    for (name, repo) in ZSH_PLUGINS {
        let dest = plugin_dir.join(name);
        if !dest.exists() {
            println!("💡 Installing {name}...");
            git_clone(repo, &dest, &[]).await;
        }
    }

    println!("✅ Powerlevel10k and plugins installed successfully!");
}

async fn git_clone(repo: &str, dest: &Path, extra: &[&str]) {
    let dest_str = dest.to_string_lossy();
    let mut args = vec!["clone"];
    args.extend_from_slice(extra);
    args.push(repo);
    args.push(dest_str.as_ref());
    if let Err(e) = process::run_inherited("git", &args).await {
        println!("❌ Failed to clone {repo}: {e}");
    }
}

async fn install_binary(config: &SetupConfig) {
    let current = match std::env::current_exe() {
        Ok(path) => path,
        Err(e) => {
            println!("❌ Error detecting binary location: {e}");
            return;
        }
    };
    if current == Path::new(&config.install_path) {
        println!("✅ Brightside is already installed at {}", config.install_path);
        return;
    }

    println!("🚚 Installing Brightside to {}", config.install_path);
    let current = current.to_string_lossy();
    report(
        process::run_inherited("sudo", &["cp", current.as_ref(), config.install_path.as_str()]).await,
        "Brightside installed globally!",
        "Failed to install binary",
    );
}

fn configure_shell() {
    let shell = std::env::var("SHELL").unwrap_or_default();
    let Some(rc) = shell_rc_file(&shell, &paths::dirs_home()) else {
        println!("❌ Could not detect shell configuration file.");
        return;
    };

    println!("🔧 Adding Brightside to PATH in {}", rc.display());
    match append_line_if_missing(&rc, PATH_EXPORT) {
        Ok(true) => println!("✅ Updated {}", rc.display()),
        Ok(false) => println!("✅ {} already exports the PATH", rc.display()),
        Err(e) => println!("❌ Failed to modify {}: {e}", rc.display()),
    }
    println!("🔄 Run 'source {}' to apply changes.", rc.display());
}

fn reset_installation(config: &SetupConfig, silent: bool) {
    let targets = reset_targets(config, &paths::dirs_home());
    let listing = targets
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if !confirm(&format!("Delete {listing}?"), silent) {
        println!("⏭ Reset cancelled.");
        return;
    }

    println!("🗑 Resetting Brightside installation...");
    for target in &targets {
        let result = if target.is_dir() {
            std::fs::remove_dir_all(target)
        } else {
            std::fs::remove_file(target)
        };
        match result {
            Ok(()) => tracing::debug!(path = %target.display(), "removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => println!("⚠️ Could not remove {}: {e}", target.display()),
        }
    }
    println!("✅ Brightside has been reset! Run 'brightside setup' again.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_shell_rc_file() {
        let home = Path::new("/home/u");
        assert_eq!(
            shell_rc_file("/bin/zsh", home),
            Some(PathBuf::from("/home/u/.zshrc"))
        );
        assert_eq!(
            shell_rc_file("/usr/bin/bash", home),
            Some(PathBuf::from("/home/u/.bashrc"))
        );
        assert_eq!(shell_rc_file("/usr/bin/fish", home), None);
        assert_eq!(shell_rc_file("", home), None);
    }

    #[test]
    fn test_missing_packages() {
        let packages: Vec<String> = ["git", "ffmpeg", "yt-dlp"].iter().map(|s| s.to_string()).collect();
        let missing = missing_packages(&packages, |p| p == "git");
        assert_eq!(missing, vec!["ffmpeg", "yt-dlp"]);
        assert!(missing_packages(&packages, |_| true).is_empty());
    }

    #[test]
    fn test_append_line_creates_and_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let rc = dir.path().join(".zshrc");

        assert!(append_line_if_missing(&rc, PATH_EXPORT).unwrap());
        assert!(!append_line_if_missing(&rc, PATH_EXPORT).unwrap());

        let content = std::fs::read_to_string(&rc).unwrap();
        assert_eq!(content.matches(PATH_EXPORT).count(), 1);
    }

    #[test]
    fn test_append_line_keeps_existing_content() {
        let dir = TempDir::new().unwrap();
        let rc = dir.path().join(".bashrc");
        std::fs::write(&rc, "alias ll='ls -l'\n").unwrap();

        append_line_if_missing(&rc, PATH_EXPORT).unwrap();
        let content = std::fs::read_to_string(&rc).unwrap();
        assert!(content.starts_with("alias ll='ls -l'\n"));
        assert!(content.trim_end().ends_with(PATH_EXPORT));
    }

    #[test]
    fn test_reset_targets() {
        let config = SetupConfig::default();
        let targets = reset_targets(&config, Path::new("/home/u"));
        assert_eq!(targets[0], PathBuf::from("/usr/local/bin/brightside"));
        assert!(targets.contains(&PathBuf::from("/home/u/.oh-my-zsh")));
        assert!(targets.contains(&PathBuf::from("/home/u/.p10k.zsh")));
        assert_eq!(targets.len(), 4);
    }
}
