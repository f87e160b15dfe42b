use std::io;
use std::path::Path;

use tempfile::NamedTempFile;

/// Downloaded audio parked on disk for the duration of one transcription.
///
/// The file is deleted when this value is dropped, including during unwinding.
pub struct StagedAudio {
    file: NamedTempFile,
}

impl StagedAudio {
    pub async fn stage(dir: Option<&Path>, bytes: &[u8]) -> io::Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("audio-").suffix(".mp3");
        let file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        tokio::fs::write(file.path(), bytes).await?;

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Deletes the file now, surfacing any error instead of ignoring it on drop.
    pub fn remove(self) -> io::Result<()> {
        self.file.close()
    }
}
