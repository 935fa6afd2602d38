use crate::image::{Image, ImageSize};

use serde::ser::SerializeStruct;
use serde::Deserialize;

impl<T, const C: usize> serde::Serialize for Image<T, C>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Image", 3)?;
        state.serialize_field("size", &self.size())?;
        state.serialize_field("channels", &C)?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

impl<'de, T, const C: usize> serde::Deserialize<'de> for Image<T, C>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ImageData<T> {
            size: ImageSize,
            channels: usize,
            data: Vec<T>,
        }

        let ImageData {
            size,
            channels,
            data,
        } = ImageData::deserialize(deserializer)?;

        if channels != C {
            return Err(serde::de::Error::custom(format!(
                "expected {} channels, found {}",
                C, channels
            )));
        }

        Image::new(size, data).map_err(serde::de::Error::custom)
    }
}
