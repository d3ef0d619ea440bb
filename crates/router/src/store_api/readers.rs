// Copyright 2024 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::*;

pub struct PutObjReader {
    pub stream: Box<dyn AsyncRead + Unpin + Send + Sync>,
    pub content_length: i64,
}

impl Debug for PutObjReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PutObjReader")
            .field("content_length", &self.content_length)
            .finish()
    }
}

impl PutObjReader {
    pub fn new(stream: Box<dyn AsyncRead + Unpin + Send + Sync>, content_length: i64) -> Self {
        PutObjReader { stream, content_length }
    }

    pub fn from_vec(data: Vec<u8>) -> Self {
        let content_length = data.len() as i64;
        PutObjReader {
            stream: Box::new(Cursor::new(data)),
            content_length,
        }
    }

    pub fn size(&self) -> i64 {
        self.content_length
    }

    pub async fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(self.content_length.max(0) as usize);
        self.stream.read_to_end(&mut buf).await?;
        Ok(buf)
    }
}

pub struct GetObjectReader {
    pub stream: Box<dyn AsyncRead + Unpin + Send + Sync>,
    pub object_info: ObjectInfo,
}

impl Debug for GetObjectReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GetObjectReader")
            .field("object_info", &self.object_info)
            .finish()
    }
}

impl GetObjectReader {
    pub fn new(stream: Box<dyn AsyncRead + Unpin + Send + Sync>, object_info: ObjectInfo) -> Self {
        GetObjectReader { stream, object_info }
    }

    pub async fn read_all(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.stream.read_to_end(&mut data).await?;
        Ok(data)
    }
}

/// Byte range requested by a GET. `start`/`end` are inclusive offsets;
/// `end == -1` means "to the end". With `is_suffix_length` set, `start` holds
/// the length of the tail to return, usually negated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HTTPRangeSpec {
    pub is_suffix_length: bool,
    pub start: i64,
    pub end: i64,
}

impl HTTPRangeSpec {
    pub fn get_offset_length(&self, res_size: i64) -> Result<(usize, i64)> {
        let len = self.get_length(res_size)?;

        let mut start = self.start;
        if self.is_suffix_length {
            start = (res_size - self.suffix_len()?).max(0);
        }
        Ok((start as usize, len))
    }

    pub fn get_length(&self, res_size: i64) -> Result<i64> {
        if res_size < 0 {
            return Err(Error::InvalidRangeSpec("The requested range is not satisfiable".to_string()));
        }

        if self.is_suffix_length {
            return Ok(self.suffix_len()?.min(res_size));
        }

        if self.start < 0 || self.start >= res_size {
            return Err(Error::InvalidRangeSpec("The requested range is not satisfiable".to_string()));
        }

        if self.end > -1 {
            if self.end < self.start {
                return Err(Error::InvalidRangeSpec(format!(
                    "range value invalid: start={},end={}",
                    self.start, self.end
                )));
            }
            let end = self.end.min(res_size - 1);
            return Ok(end - self.start + 1);
        }

        if self.end == -1 {
            return Ok(res_size - self.start);
        }

        Err(Error::InvalidRangeSpec(format!("range value invalid: start={},end={}", self.start, self.end)))
    }

    // Suffix ranges may carry the tail length negated or as is.
    fn suffix_len(&self) -> Result<i64> {
        if self.start < 0 {
            self.start
                .checked_neg()
                .ok_or_else(|| Error::InvalidRangeSpec("range value invalid: suffix length overflow".to_string()))
        } else {
            Ok(self.start)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_spec_bounded() {
        let rs = HTTPRangeSpec {
            is_suffix_length: false,
            start: 2,
            end: 5,
        };
        assert_eq!(rs.get_offset_length(10).unwrap(), (2, 4));
        // end past the object is clamped
        assert_eq!(rs.get_length(4).unwrap(), 2);
    }

    #[test]
    fn test_range_spec_open_ended() {
        let rs = HTTPRangeSpec {
            is_suffix_length: false,
            start: 3,
            end: -1,
        };
        assert_eq!(rs.get_offset_length(10).unwrap(), (3, 7));
    }

    #[test]
    fn test_range_spec_suffix() {
        let rs = HTTPRangeSpec {
            is_suffix_length: true,
            start: -4,
            end: -1,
        };
        assert_eq!(rs.get_offset_length(10).unwrap(), (6, 4));
        assert_eq!(rs.get_offset_length(2).unwrap(), (0, 2));
    }

    #[test]
    fn test_range_spec_suffix_positive_length() {
        let rs = HTTPRangeSpec {
            is_suffix_length: true,
            start: 4,
            end: -1,
        };
        assert_eq!(rs.get_offset_length(10).unwrap(), (6, 4));
        assert_eq!(rs.get_offset_length(3).unwrap(), (0, 3));
    }

    #[test]
    fn test_range_spec_suffix_overflow() {
        let rs = HTTPRangeSpec {
            is_suffix_length: true,
            start: i64::MIN,
            end: -1,
        };
        assert!(matches!(rs.get_length(10), Err(Error::InvalidRangeSpec(_))));
    }

    #[test]
    fn test_range_spec_end_before_start() {
        let rs = HTTPRangeSpec {
            is_suffix_length: false,
            start: 5,
            end: 2,
        };
        assert!(matches!(rs.get_offset_length(10), Err(Error::InvalidRangeSpec(_))));
    }

    #[test]
    fn test_range_spec_unsatisfiable() {
        let rs = HTTPRangeSpec {
            is_suffix_length: false,
            start: 10,
            end: 20,
        };
        assert!(matches!(rs.get_length(10), Err(Error::InvalidRangeSpec(_))));
    }

    #[tokio::test]
    async fn test_put_obj_reader_from_vec() {
        let mut reader = PutObjReader::from_vec(b"hello".to_vec());
        assert_eq!(reader.size(), 5);
        assert_eq!(reader.read_all().await.unwrap(), b"hello");
    }
}
