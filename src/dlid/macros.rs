macro_rules! data_elements {
	($(#[$enum_meta:meta])* $vis:vis enum $enum_id:ident for $record:ident { $($(#[$meta:meta])* $id:ident : $tag:literal, $desc:literal $(=> $($field:ident).+)?;)* }) => {
		$(#[$enum_meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		$vis enum $enum_id {
			$($(#[$meta])* $id),*
		}

		impl $enum_id {
			pub const COUNT: usize = $crate::dlid::data_elements!(@count $($id,)*);

			/// Canonical encode order; the wire format is not reorderable.
			pub const LIST: [Self; Self::COUNT] = [$(Self::$id),*];

			pub fn from_id(id: &[u8; 3]) -> Option<Self> {
				match id {
					$($tag => Some(Self::$id),)*
					_ => None
				}
			}

			pub fn id(&self) -> &'static [u8; 3] {
				match self {
					$(Self::$id => $tag),*
				}
			}

			pub fn string_id(&self) -> &'static str {
				unsafe { std::str::from_utf8_unchecked(self.id()) }
			}

			pub fn description(&self) -> &'static str {
				match self {
					$(Self::$id => $desc),*
				}
			}

			/// Raw slot value in `record`; always empty for the structural
			/// truncation placeholders, which carry no data.
			pub fn value_of<'a>(&self, record: &'a $record) -> &'a str {
				match self {
					$(Self::$id => $crate::dlid::data_elements!(@value record $(, $($field).+)?)),*
				}
			}

			pub fn is_placeholder(&self) -> bool {
				match self {
					$(Self::$id => $crate::dlid::data_elements!(@placeholder $($($field).+)?)),*
				}
			}
		}
	};
	(@count $a:ident, $($rest:ident,)*) => {
		1usize + $crate::dlid::data_elements!(@count $($rest,)*)
	};
	(@count) => {
		0usize
	};
	(@value $record:ident, $($field:ident).+) => {
		$record.$($field).+.as_str()
	};
	(@value $record:ident) => {
		""
	};
	(@placeholder $($field:ident).+) => {
		false
	};
	(@placeholder) => {
		true
	};
}

pub(crate) use data_elements;
