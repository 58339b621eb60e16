use crate::{scalar::Scalar, vector::Vector};
use core::{fmt, marker::PhantomData};
use serde::{
    de::{self, IgnoredAny, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};

// Vectors are written as a fixed length tuple, which is a plain array in JSON.
impl<S: Serialize, const N: usize> Serialize for Vector<S, N> {
    fn serialize<T: Serializer>(&self, serializer: T) -> Result<T::Ok, T::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for component in self.iter() {
            tuple.serialize_element(component)?;
        }
        tuple.end()
    }
}

struct VectorVisitor<S, const N: usize>(PhantomData<S>);

impl<'de, S: Scalar + Deserialize<'de>, const N: usize> Visitor<'de> for VectorVisitor<S, N> {
    type Value = Vector<S, N>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a sequence of {} components", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut components = [S::ZERO; N];
        for (i, component) in components.iter_mut().enumerate() {
            *component = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }
        Ok(Vector::from_array(components))
    }
}

impl<'de, S: Scalar + Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<S, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, VectorVisitor(PhantomData))
    }
}

#[cfg(test)]
mod test {
    use crate::{Vector, Vector3d};

    #[test]
    fn test_json() {
        let v = Vector3d::new(1.5, -2.0, 0.25);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!("[1.5,-2.0,0.25]", json);
        assert_eq!(v, serde_json::from_str::<Vector3d>(&json).unwrap());

        let v: Vector<i32, 4> = serde_json::from_str("[1, 2, 3, 4]").unwrap();
        assert_eq!(Vector::<i32, 4>::new(1, 2, 3, 4), v);
    }

    #[test]
    fn test_json_wrong_length() {
        assert!(serde_json::from_str::<Vector3d>("[1.0, 2.0]").is_err());
        assert!(serde_json::from_str::<Vector3d>("[1.0, 2.0, 3.0, 4.0]").is_err());
        assert!(serde_json::from_str::<Vector3d>("{\"x\": 1.0}").is_err());
    }
}
