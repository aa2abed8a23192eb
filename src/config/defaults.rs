//! Built-in expectations for the audio player project layout
//!
//! Used whenever `.projcheck.toml` is absent or leaves a section out.

use crate::core::models::{CheckItem, ExpectedGroup};

/// Package source directory shared by the default source paths
const SRC_MAIN: &str = "app/src/main/java/com/audioplayer";

pub(crate) fn default_descriptor() -> String {
    "build.gradle".to_string()
}

pub(crate) fn default_plugins() -> Vec<String> {
    vec![
        "com.android.application".to_string(),
        "org.jetbrains.kotlin.android".to_string(),
    ]
}

pub(crate) fn default_dependencies() -> Vec<String> {
    vec![
        "androidx.media3:media3-exoplayer".to_string(),
        "androidx.room:room-runtime".to_string(),
    ]
}

pub(crate) fn default_sources() -> Vec<String> {
    [
        "MainActivity.kt",
        "data/AudioFile.kt",
        "service/AudioService.kt",
        "ui/AudioPlayerApp.kt",
        "viewmodel/AudioPlayerViewModel.kt",
    ]
    .iter()
    .map(|f| format!("{SRC_MAIN}/{f}"))
    .collect()
}

pub(crate) fn default_source_root() -> String {
    "app/src".to_string()
}

pub(crate) fn default_extension() -> String {
    "kt".to_string()
}

pub(crate) fn default_groups() -> Vec<ExpectedGroup> {
    let src = |file: &str, description: &str| {
        CheckItem::file(format!("{SRC_MAIN}/{file}"), description)
    };

    vec![
        ExpectedGroup::new(
            "Root files",
            vec![
                CheckItem::file("build.gradle", "Root build script"),
                CheckItem::file("settings.gradle", "Settings script"),
                CheckItem::file("gradlew.bat", "Gradle wrapper (Windows)"),
                CheckItem::file("CODEBUDDY.md", "Project notes"),
            ],
        ),
        ExpectedGroup::new(
            "App module",
            vec![
                CheckItem::file("app/build.gradle", "App build script"),
                CheckItem::file("app/src/main/AndroidManifest.xml", "Android manifest"),
            ],
        ),
        ExpectedGroup::new(
            "Sources",
            vec![
                src("MainActivity.kt", "Main activity"),
                src("data/PlayMode.kt", "Play mode enum"),
                src("data/AudioFile.kt", "Audio file entity"),
                src("data/Playlist.kt", "Playlist entity"),
                src("data/AudioDatabase.kt", "Database"),
                src("service/AudioService.kt", "Audio service"),
                src("service/MediaController.kt", "Media controller"),
                src("service/AudioNotificationAdapter.kt", "Notification adapter"),
                src("ui/AudioPlayerApp.kt", "Main UI"),
                src("ui/PlaybackControls.kt", "Playback controls"),
                src("ui/FolderPicker.kt", "Folder picker"),
                src("viewmodel/AudioPlayerViewModel.kt", "Main view model"),
                src("repository/AudioRepository.kt", "Audio repository"),
                src("utils/FileManager.kt", "File manager"),
            ],
        ),
        ExpectedGroup::new(
            "Tests",
            vec![
                CheckItem::directory("app/src/test", "Unit test directory"),
                CheckItem::directory("app/src/androidTest", "Instrumented test directory"),
                CheckItem::file(
                    "app/src/test/java/com/audioplayer/PlayModeTest.kt",
                    "Play mode test",
                ),
                CheckItem::file(
                    "app/src/androidTest/java/com/audioplayer/MainActivityTest.kt",
                    "Main activity test",
                ),
            ],
        ),
        ExpectedGroup::new(
            "Resources",
            vec![CheckItem::directory("app/src/main/res", "Resource directory")],
        ),
    ]
}
