use super::*;

const DELIMITER: char = ',';
const EXTENSION: &str = ".csv";
const QUOTE: char = '"';
const TERMINATOR: &str = "\r\n";

pub(crate) struct CsvWriter<W: Write> {
  inner: W,
}

impl CsvWriter<BufWriter<File>> {
  pub(crate) fn create(path: &Path) -> io::Result<Self> {
    Ok(Self::new(BufWriter::new(File::create(path)?)))
  }
}

impl<W: Write> CsvWriter<W> {
  fn encode_field(field: &str) -> Cow<'_, str> {
    if !field.contains([DELIMITER, QUOTE, '\r', '\n']) {
      return Cow::Borrowed(field);
    }

    let mut quoted = String::with_capacity(field.len() + 2);

    quoted.push(QUOTE);

    for ch in field.chars() {
      if ch == QUOTE {
        quoted.push(QUOTE);
      }

      quoted.push(ch);
    }

    quoted.push(QUOTE);

    Cow::Owned(quoted)
  }

  pub(crate) fn finish(mut self) -> io::Result<W> {
    self.inner.flush()?;
    Ok(self.inner)
  }

  pub(crate) fn new(inner: W) -> Self {
    Self { inner }
  }

  pub(crate) fn write_record(&mut self, fields: &[&str]) -> io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
      if i > 0 {
        write!(self.inner, "{DELIMITER}")?;
      }

      self.inner.write_all(Self::encode_field(field).as_bytes())?;
    }

    self.inner.write_all(TERMINATOR.as_bytes())
  }

  pub(crate) fn write_rows(&mut self, rows: &[FlatRow]) -> io::Result<()> {
    self.write_record(&FlatRow::HEADER)?;

    for row in rows {
      self.write_record(&row.fields())?;
    }

    Ok(())
  }
}

pub(crate) fn csv_path(name: &str) -> PathBuf {
  if name.ends_with(EXTENSION) {
    PathBuf::from(name)
  } else {
    PathBuf::from(format!("{name}{EXTENSION}"))
  }
}

/// Writes the header and `rows` to `path`, replacing any existing file. A
/// failure part way through leaves whatever was already written.
pub(crate) fn write_csv(path: &Path, rows: &[FlatRow]) -> Result<(), Error> {
  let io_error = |source| Error::Io {
    path: path.to_path_buf(),
    source,
  };

  let mut writer = CsvWriter::create(path).map_err(io_error)?;

  writer.write_rows(rows).map_err(io_error)?;

  writer.finish().map_err(io_error)?;

  Ok(())
}
