//! Deterministic, non-cryptographic hashing of fixed-size vectors and
//! matrices.
//!
//! Every shape hashes the same way: reinterpret the lanes as unsigned
//! 32-bit integers, multiply each lane (each column's lanes for matrices)
//! by its own literal odd constant, sum the products with wrapping
//! arithmetic, and add one trailing odd constant. [`hash`] folds the wide
//! intermediate down to a single `u32` with a lane sum; [`hashwide`]
//! returns it unreduced, so composite structures can combine several wide
//! values and collapse only once at the end.
//!
//! Each shape owns two distinct constant tables (one per function) so the
//! narrow and wide results of the same value are uncorrelated. The
//! constants are odd, share no small factors and have roughly even bit
//! density, which is what gives the multiply-accumulate its avalanche
//! behaviour.
//!
//! The functions are stateless and safe to call concurrently; identical
//! input bit patterns always produce identical output.

use crate::bits::AsUint;
use crate::types::{
    F16x2, F16x3, F16x4, F32x2, F32x3, F32x4, I32x2, I32x3, I32x4, Mat3x3, Mat4x4, Quat, U32x2, U32x3,
    U32x4,
};

/// Hashing of one fixed-size value into a narrow or wide result.
pub trait VectorHash {
    /// The unreduced per-lane (or per-column) result shape.
    type Wide;

    /// Mixes the value down to a single 32-bit hash.
    fn hash(self) -> u32;

    /// Mixes the value into an unreduced per-lane hash for hierarchical
    /// combination.
    fn hashwide(self) -> Self::Wide;
}

/// Returns a 32-bit hash of `v`.
#[inline(always)]
pub fn hash<T: VectorHash>(v: T) -> u32 {
    VectorHash::hash(v)
}

/// Returns the unreduced per-lane hash of `v`.
#[inline(always)]
pub fn hashwide<T: VectorHash>(v: T) -> T::Wide {
    VectorHash::hashwide(v)
}

macro_rules! uint_vector_hash {
    ($ty:ident, [$($k:expr),+], $kf:expr, [$($wk:expr),+], $wkf:expr) => {
        impl VectorHash for $ty {
            type Wide = $ty;

            #[inline(always)]
            fn hash(self) -> u32 {
                (self * $ty::new($($k),+)).csum().wrapping_add($kf)
            }

            #[inline(always)]
            fn hashwide(self) -> $ty {
                self * $ty::new($($wk),+) + $ty::splat($wkf)
            }
        }
    };
}

uint_vector_hash!(
    U32x2,
    [0x9A6E06CB, 0x69830BDF], 0x5742E90F,
    [0xFD38940F, 0xF075B093], 0xA8226205
);
uint_vector_hash!(
    U32x3,
    [0xA73ACE69, 0xF540E551, 0x11E7CABB], 0x0AB1D689,
    [0xF51DB2F7, 0x0E60DC9D, 0x24FC0317], 0xCDF47833
);
uint_vector_hash!(
    U32x4,
    [0xBE53CAF9, 0x0705D487, 0x08B9F029, 0xE1DF5B99], 0xF6E1ED59,
    [0x103516B1, 0x98EBA471, 0xFA7C4F79, 0x29EED7C7], 0xB400F461
);

macro_rules! reinterpreted_vector_hash {
    ($ty:ident => $uint:ident, [$($k:expr),+], $kf:expr, [$($wk:expr),+], $wkf:expr) => {
        impl VectorHash for $ty {
            type Wide = $uint;

            #[inline(always)]
            fn hash(self) -> u32 {
                (self.as_uint() * $uint::new($($k),+))
                    .csum()
                    .wrapping_add($kf)
            }

            #[inline(always)]
            fn hashwide(self) -> $uint {
                self.as_uint() * $uint::new($($wk),+) + $uint::splat($wkf)
            }
        }
    };
}

reinterpreted_vector_hash!(
    I32x2 => U32x2,
    [0x7071AE43, 0x2354BEEF], 0x8E5F8D9B,
    [0x41170F23, 0xFDDE82FF], 0x8259C2AF
);
reinterpreted_vector_hash!(
    I32x3 => U32x3,
    [0x2A556CA3, 0x077D1C67, 0x91165B41], 0x0AAC6E1F,
    [0xE02C719D, 0x281C5111, 0xE9FEF7B7], 0xF42FCAAF
);
reinterpreted_vector_hash!(
    I32x4 => U32x4,
    [0xB5A3ADF3, 0x16FFD1F3, 0xBFDD78BD, 0xB4E85947], 0x04EC4B21,
    [0xFBFDBE93, 0xC00AE7ED, 0x51027D95, 0x43C70735], 0x7B80158D
);
reinterpreted_vector_hash!(
    F32x2 => U32x2,
    [0x5215AF05, 0x3FD38229], 0x6BE5B5B1,
    [0x2A519C67, 0xF0AC563D], 0xBC67823D
);
reinterpreted_vector_hash!(
    F32x3 => U32x3,
    [0x70C4D135, 0x5DCCC709, 0xDEDC0CCB], 0x99E2CE8B,
    [0x5B0225B9, 0x9D33B005, 0x9ACEB4E7], 0xB6DB1AE7
);
reinterpreted_vector_hash!(
    F32x4 => U32x4,
    [0x824EA089, 0xDA4B78B1, 0x509D95CB, 0xC15E10AF], 0xC4474D0F,
    [0x691C0ECB, 0xA32E5B85, 0x302BADB9, 0xE57B243F], 0x31371B1B
);

impl VectorHash for F16x2 {
    type Wide = U32x2;

    #[inline(always)]
    fn hash(self) -> u32 {
        (self.widen_bits() * U32x2::new(0x030E_C557, 0x6CE1_E041))
            .csum()
            .wrapping_add(0x1139_F857)
    }

    #[inline(always)]
    fn hashwide(self) -> U32x2 {
        self.widen_bits() * U32x2::new(0x7264_58D7, 0xF24F_97E3) + U32x2::splat(0x472B_DE0D)
    }
}

impl VectorHash for F16x3 {
    type Wide = U32x3;

    #[inline(always)]
    fn hash(self) -> u32 {
        (self.widen_bits() * U32x3::new(0x8FB3_2F5D, 0x1D90_C1A9, 0xB55A_F713))
            .csum()
            .wrapping_add(0x6A0E_1E2B)
    }

    #[inline(always)]
    fn hashwide(self) -> U32x3 {
        self.widen_bits() * U32x3::new(0xC5A1_3F8B, 0x73D9_E60F, 0x2EB7_7C45)
            + U32x3::splat(0x90C3_52D7)
    }
}

impl VectorHash for F16x4 {
    type Wide = U32x4;

    #[inline(always)]
    fn hash(self) -> u32 {
        (self.widen_bits() * U32x4::new(0x1727_B89B, 0xCBF4_9B7B, 0x6388_2C7D, 0xED5B_7F03))
            .csum()
            .wrapping_add(0x14F3_AEE9)
    }

    #[inline(always)]
    fn hashwide(self) -> U32x4 {
        self.widen_bits() * U32x4::new(0x02E7_91C9, 0x7B63_95F5, 0x1483_6637, 0x0DE6_5421)
            + U32x4::splat(0x1C2E_0F67)
    }
}

impl F16x2 {
    #[inline(always)]
    fn widen_bits(self) -> U32x2 {
        U32x2::new(u32::from(self.x.to_bits()), u32::from(self.y.to_bits()))
    }
}

impl F16x3 {
    #[inline(always)]
    fn widen_bits(self) -> U32x3 {
        U32x3::new(
            u32::from(self.x.to_bits()),
            u32::from(self.y.to_bits()),
            u32::from(self.z.to_bits()),
        )
    }
}

impl F16x4 {
    #[inline(always)]
    fn widen_bits(self) -> U32x4 {
        U32x4::new(
            u32::from(self.x.to_bits()),
            u32::from(self.y.to_bits()),
            u32::from(self.z.to_bits()),
            u32::from(self.w.to_bits()),
        )
    }
}

impl VectorHash for Quat {
    type Wide = U32x4;

    #[inline(always)]
    fn hash(self) -> u32 {
        (self.to_vector().as_uint()
            * U32x4::new(0x8D95_E7E7, 0x7308_BAE7, 0x7A3B_1391, 0x89CE_B379))
        .csum()
        .wrapping_add(0x950E_E76B)
    }

    #[inline(always)]
    fn hashwide(self) -> U32x4 {
        self.to_vector().as_uint()
            * U32x4::new(0xF9A9_5A2B, 0x8976_33ED, 0x30EC_CA6D, 0x061C_B303)
            + U32x4::splat(0x93B3_093D)
    }
}

impl VectorHash for Mat3x3 {
    type Wide = U32x3;

    #[inline(always)]
    fn hash(self) -> u32 {
        (self.c0.as_uint() * U32x3::new(0x0D87_B7A5, 0xBDF6_638D, 0x7E69_1C09)
            + self.c1.as_uint() * U32x3::new(0xEBE5_FAFF, 0x1030_6D07, 0x2AF5_E137)
            + self.c2.as_uint() * U32x3::new(0xC633_1919, 0x8A6D_BECF, 0xB60A_FC91))
        .csum()
        .wrapping_add(0x5F6A_D1B7)
    }

    #[inline(always)]
    fn hashwide(self) -> U32x3 {
        self.c0.as_uint() * U32x3::new(0x4F40_4D5F, 0x003C_76D7, 0x740F_2C2F)
            + self.c1.as_uint() * U32x3::new(0x78F8_B0F1, 0x4975_C19F, 0x739D_F9C9)
            + self.c2.as_uint() * U32x3::new(0xAD82_8645, 0xD477_BDE7, 0x899F_6003)
            + U32x3::splat(0xDEFC_3D01)
    }
}

impl VectorHash for Mat4x4 {
    type Wide = U32x4;

    #[inline(always)]
    fn hash(self) -> u32 {
        (self.c0.as_uint() * U32x4::new(0x099D_84DB, 0xCA12_2B17, 0xE192_B8C9, 0x70B6_0F85)
            + self.c1.as_uint() * U32x4::new(0x6B58_782B, 0x4B93_E651, 0xE896_2EC1, 0xB55D_92DB)
            + self.c2.as_uint() * U32x4::new(0xDBD4_0E25, 0x9670_1EFB, 0x3A1E_30CB, 0x3764_07A9)
            + self.c3.as_uint() * U32x4::new(0x3B69_4339, 0x8B18_F5C7, 0x4651_E6F7, 0x4BCE_0045))
        .csum()
        .wrapping_add(0x95B6_E6B9)
    }

    #[inline(always)]
    fn hashwide(self) -> U32x4 {
        self.c0.as_uint() * U32x4::new(0xCA60_A787, 0x0682_B58F, 0x3F1B_83A7, 0x9DF4_A0F5)
            + self.c1.as_uint() * U32x4::new(0x3C1C_5C43, 0x2702_BA79, 0xF1A9_727B, 0x50A4_DF11)
            + self.c2.as_uint() * U32x4::new(0x8561_F57D, 0x431C_37E3, 0xA318_94A1, 0x0E95_B909)
            + self.c3.as_uint() * U32x4::new(0xFA09_84A5, 0x8832_C32D, 0x6FB1_1967, 0xF251_F305)
            + U32x4::splat(0x4D16_1CF3)
    }
}
