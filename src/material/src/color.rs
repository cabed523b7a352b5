/// Brand fallback used whenever a fill string fails to parse.
pub const FALLBACK_FILL: [u8; 3] = [0xb8, 0xa5, 0x89];

/// Parse `#rrggbb` (leading `#` optional). Anything malformed falls back to
/// the default fill rather than erroring; a bad color is a styling bug, not
/// a reason to kill an animation.
pub fn parse_hex(s: &str) -> [u8; 3] {
	let hex = s.strip_prefix('#').unwrap_or(s);
	if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
		log::warn!("bad fill color {:?}, using fallback", s);
		return FALLBACK_FILL;
	}
	let mut out = [0u8; 3];
	for (i, chunk) in out.iter_mut().enumerate() {
		match u8::from_str_radix(&hex[2 * i..2 * i + 2], 16) {
			Ok(v) => *chunk = v,
			Err(_) => return FALLBACK_FILL,
		}
	}
	out
}

pub fn lighten(c: [u8; 3], amount: u8) -> [u8; 3] {
	[
		c[0].saturating_add(amount),
		c[1].saturating_add(amount),
		c[2].saturating_add(amount),
	]
}

pub fn darken(c: [u8; 3], amount: u8) -> [u8; 3] {
	[
		c[0].saturating_sub(amount),
		c[1].saturating_sub(amount),
		c[2].saturating_sub(amount),
	]
}

pub fn with_alpha(c: [u8; 3], a: u8) -> [u8; 4] {
	[c[0], c[1], c[2], a]
}
