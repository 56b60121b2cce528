use rand::Rng;
use std::{
    env::temp_dir,
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
};
use uuid::Uuid;

pub fn fixture(len: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen()).collect()
}

pub fn temp_file(content: &[u8]) -> Result<PathBuf, io::Error> {
    let path = temp_dir().join(Uuid::new_v4().to_string());
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;
    file.write_all(content)?;
    file.flush()?;
    Ok(path)
}

pub fn missing_path() -> PathBuf {
    temp_dir().join(Uuid::new_v4().to_string())
}
