use super::*;
use crate::{encode::sink::AudioInputConfig, foundation::core::Fps};

fn cfg(w: u32, h: u32) -> SinkConfig {
    SinkConfig {
        width: w,
        height: h,
        fps: Fps::new(60, 1).unwrap(),
        audio: None,
    }
}

fn strings(args: &[OsString]) -> Vec<String> {
    args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
}

#[test]
fn odd_and_zero_sizes_are_rejected_before_spawning() {
    assert!(validate_sink_config(&cfg(640, 480)).is_ok());
    assert!(validate_sink_config(&cfg(641, 480)).is_err());
    assert!(validate_sink_config(&cfg(640, 0)).is_err());

    let mut bad_fps = cfg(640, 480);
    bad_fps.fps = Fps { num: 0, den: 1 };
    assert!(validate_sink_config(&bad_fps).is_err());

    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(std::env::temp_dir().join("odd.mp4")));
    let err = sink.begin(cfg(3, 2)).unwrap_err();
    assert!(matches!(err, DocError::Validation(_)));
}

#[test]
fn silent_output_disables_audio() {
    let args = strings(&ffmpeg_args(&cfg(640, 480), &FfmpegSinkOpts::new("out.mp4")));
    assert_eq!(args.first().map(String::as_str), Some("-y"));
    assert!(args.windows(2).any(|w| w == ["-s", "640x480"]));
    assert!(args.windows(2).any(|w| w == ["-r", "60/1"]));
    assert!(args.contains(&"-an".to_string()));
    assert_eq!(args.last().map(String::as_str), Some("out.mp4"));
}

#[test]
fn looped_soundtrack_is_repeated_and_cut_to_video_length() {
    let mut c = cfg(640, 480);
    c.audio = Some(AudioInputConfig {
        path: PathBuf::from("music.mp3"),
        looped: true,
    });
    let args = strings(&ffmpeg_args(&c, &FfmpegSinkOpts::new("out.mp4")));

    let loop_at = args.iter().position(|a| a == "-stream_loop").unwrap();
    assert_eq!(args[loop_at + 1], "-1");
    assert_eq!(args[loop_at + 2], "-i");
    assert_eq!(args[loop_at + 3], "music.mp3");
    assert!(args.contains(&"-shortest".to_string()));
    assert!(!args.contains(&"-an".to_string()));

    c.audio = Some(AudioInputConfig {
        path: PathBuf::from("music.mp3"),
        looped: false,
    });
    let args = strings(&ffmpeg_args(&c, &FfmpegSinkOpts::new("out.mp4")));
    assert!(!args.contains(&"-stream_loop".to_string()));
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("never.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}
