//! VALSET key catalogue.
//!
//! Every configuration item reachable through CFG-VALSET, as
//! `(key name, 32-bit key id, value type)`. The table is sorted by
//! name: resolution is a binary search.

use super::KeyType;

/// One configuration key of the VALSET catalogue.
pub struct ValsetKey {
    /// Full key name, `CFG-<GROUP>-<ITEM>`.
    pub name: &'static str,

    /// 32-bit key id, bits 28..=30 encoding the storage size.
    pub id: u32,

    /// Value type, drives token conversion and encoded size.
    pub kind: KeyType,
}

/// The catalogue, sorted by key name.
pub const VALSET_KEYS: &[ValsetKey] = &[
    ValsetKey {
        name: "CFG-ANA-ORBMAXERR",
        id: 0x30230002,
        kind: KeyType::U2,
    },
    ValsetKey {
        name: "CFG-ANA-USE_ANA",
        id: 0x10230001,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-HW-ANT_CFG_OPENDET",
        id: 0x10A30031,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-HW-ANT_CFG_PWRDOWN",
        id: 0x10A30033,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-HW-ANT_CFG_RECOVER",
        id: 0x10A30035,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-HW-ANT_CFG_SHORTDET",
        id: 0x10A3002F,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-HW-ANT_CFG_VOLTCTRL",
        id: 0x10A3002E,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-HW-ANT_SUP_OPEN_PIN",
        id: 0x20A30038,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-HW-ANT_SUP_SHORT_PIN",
        id: 0x20A30037,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-HW-ANT_SUP_SWITCH_PIN",
        id: 0x20A30036,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-I2C-ADDRESS",
        id: 0x20510001,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-I2C-ENABLED",
        id: 0x10510003,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-I2C-EXTENDEDTIMEOUT",
        id: 0x10510002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-I2CINPROT-NMEA",
        id: 0x10710002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-I2CINPROT-RTCM3X",
        id: 0x10710004,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-I2CINPROT-UBX",
        id: 0x10710001,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-I2COUTPROT-NMEA",
        id: 0x10720002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-I2COUTPROT-RTCM3X",
        id: 0x10720004,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-I2COUTPROT-UBX",
        id: 0x10720001,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-INFMSG-NMEA_I2C",
        id: 0x20920006,
        kind: KeyType::X1,
    },
    ValsetKey {
        name: "CFG-INFMSG-NMEA_SPI",
        id: 0x2092000A,
        kind: KeyType::X1,
    },
    ValsetKey {
        name: "CFG-INFMSG-NMEA_UART1",
        id: 0x20920007,
        kind: KeyType::X1,
    },
    ValsetKey {
        name: "CFG-INFMSG-NMEA_UART2",
        id: 0x20920008,
        kind: KeyType::X1,
    },
    ValsetKey {
        name: "CFG-INFMSG-NMEA_USB",
        id: 0x20920009,
        kind: KeyType::X1,
    },
    ValsetKey {
        name: "CFG-INFMSG-UBX_I2C",
        id: 0x20920001,
        kind: KeyType::X1,
    },
    ValsetKey {
        name: "CFG-INFMSG-UBX_SPI",
        id: 0x20920005,
        kind: KeyType::X1,
    },
    ValsetKey {
        name: "CFG-INFMSG-UBX_UART1",
        id: 0x20920002,
        kind: KeyType::X1,
    },
    ValsetKey {
        name: "CFG-INFMSG-UBX_UART2",
        id: 0x20920003,
        kind: KeyType::X1,
    },
    ValsetKey {
        name: "CFG-INFMSG-UBX_USB",
        id: 0x20920004,
        kind: KeyType::X1,
    },
    ValsetKey {
        name: "CFG-ITFM-ANTSETTING",
        id: 0x20410010,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-ITFM-BBTHRESHOLD",
        id: 0x20410001,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-ITFM-CWTHRESHOLD",
        id: 0x20410002,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-ITFM-ENABLE",
        id: 0x1041000D,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-ITFM-ENABLE_AUX",
        id: 0x10410013,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-MOT-GNSSDIST_THRS",
        id: 0x3025003B,
        kind: KeyType::U2,
    },
    ValsetKey {
        name: "CFG-MOT-GNSSSPEED_THRS",
        id: 0x20250038,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GGA_I2C",
        id: 0x209100BA,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GGA_SPI",
        id: 0x209100BE,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GGA_UART1",
        id: 0x209100BB,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GGA_UART2",
        id: 0x209100BC,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GGA_USB",
        id: 0x209100BD,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GLL_I2C",
        id: 0x209100C9,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GLL_SPI",
        id: 0x209100CD,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GLL_UART1",
        id: 0x209100CA,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GLL_UART2",
        id: 0x209100CB,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GLL_USB",
        id: 0x209100CC,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GSA_I2C",
        id: 0x209100BF,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GSA_SPI",
        id: 0x209100C3,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GSA_UART1",
        id: 0x209100C0,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GSA_UART2",
        id: 0x209100C1,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GSA_USB",
        id: 0x209100C2,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GSV_I2C",
        id: 0x209100C4,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GSV_SPI",
        id: 0x209100C8,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GSV_UART1",
        id: 0x209100C5,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GSV_UART2",
        id: 0x209100C6,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_GSV_USB",
        id: 0x209100C7,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_RMC_I2C",
        id: 0x209100AB,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_RMC_SPI",
        id: 0x209100AF,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_RMC_UART1",
        id: 0x209100AC,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_RMC_UART2",
        id: 0x209100AD,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_RMC_USB",
        id: 0x209100AE,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_VTG_I2C",
        id: 0x209100B0,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_VTG_SPI",
        id: 0x209100B4,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_VTG_UART1",
        id: 0x209100B1,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_VTG_UART2",
        id: 0x209100B2,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_VTG_USB",
        id: 0x209100B3,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_ZDA_I2C",
        id: 0x209100D8,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_ZDA_SPI",
        id: 0x209100DC,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_ZDA_UART1",
        id: 0x209100D9,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_ZDA_UART2",
        id: 0x209100DA,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-NMEA_ID_ZDA_USB",
        id: 0x209100DB,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_MON_HW_I2C",
        id: 0x209101B9,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_MON_HW_SPI",
        id: 0x209101BD,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_MON_HW_UART1",
        id: 0x209101BA,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_MON_HW_UART2",
        id: 0x209101BB,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_MON_HW_USB",
        id: 0x209101BC,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_MON_RF_I2C",
        id: 0x20910359,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_MON_RF_SPI",
        id: 0x2091035D,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_MON_RF_UART1",
        id: 0x2091035A,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_MON_RF_UART2",
        id: 0x2091035B,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_MON_RF_USB",
        id: 0x2091035C,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_CLOCK_I2C",
        id: 0x20910065,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_CLOCK_SPI",
        id: 0x20910069,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_CLOCK_UART1",
        id: 0x20910066,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_CLOCK_UART2",
        id: 0x20910067,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_CLOCK_USB",
        id: 0x20910068,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_DOP_I2C",
        id: 0x20910038,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_DOP_SPI",
        id: 0x2091003C,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_DOP_UART1",
        id: 0x20910039,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_DOP_UART2",
        id: 0x2091003A,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_DOP_USB",
        id: 0x2091003B,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_EOE_I2C",
        id: 0x2091015F,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_EOE_SPI",
        id: 0x20910163,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_EOE_UART1",
        id: 0x20910160,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_EOE_UART2",
        id: 0x20910161,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_EOE_USB",
        id: 0x20910162,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_ODO_I2C",
        id: 0x2091007E,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_ODO_SPI",
        id: 0x20910082,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_ODO_UART1",
        id: 0x2091007F,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_ODO_UART2",
        id: 0x20910080,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_ODO_USB",
        id: 0x20910081,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_POSECEF_I2C",
        id: 0x20910024,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_POSECEF_SPI",
        id: 0x20910028,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_POSECEF_UART1",
        id: 0x20910025,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_POSECEF_UART2",
        id: 0x20910026,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_POSECEF_USB",
        id: 0x20910027,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_POSLLH_I2C",
        id: 0x20910029,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_POSLLH_SPI",
        id: 0x2091002D,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_POSLLH_UART1",
        id: 0x2091002A,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_POSLLH_UART2",
        id: 0x2091002B,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_POSLLH_USB",
        id: 0x2091002C,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_PVT_I2C",
        id: 0x20910006,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_PVT_SPI",
        id: 0x2091000A,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_PVT_UART1",
        id: 0x20910007,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_PVT_UART2",
        id: 0x20910008,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_PVT_USB",
        id: 0x20910009,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SAT_I2C",
        id: 0x20910015,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SAT_SPI",
        id: 0x20910019,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SAT_UART1",
        id: 0x20910016,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SAT_UART2",
        id: 0x20910017,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SAT_USB",
        id: 0x20910018,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SBAS_I2C",
        id: 0x2091006A,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SBAS_SPI",
        id: 0x2091006E,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SBAS_UART1",
        id: 0x2091006B,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SBAS_UART2",
        id: 0x2091006C,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SBAS_USB",
        id: 0x2091006D,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SIG_I2C",
        id: 0x20910345,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SIG_SPI",
        id: 0x20910349,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SIG_UART1",
        id: 0x20910346,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SIG_UART2",
        id: 0x20910347,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_SIG_USB",
        id: 0x20910348,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_STATUS_I2C",
        id: 0x2091001A,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_STATUS_SPI",
        id: 0x2091001E,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_STATUS_UART1",
        id: 0x2091001B,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_STATUS_UART2",
        id: 0x2091001C,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_STATUS_USB",
        id: 0x2091001D,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_TIMEGPS_I2C",
        id: 0x20910047,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_TIMEGPS_SPI",
        id: 0x2091004B,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_TIMEGPS_UART1",
        id: 0x20910048,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_TIMEGPS_UART2",
        id: 0x20910049,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_TIMEGPS_USB",
        id: 0x2091004A,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_TIMEUTC_I2C",
        id: 0x2091005B,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_TIMEUTC_SPI",
        id: 0x2091005F,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_TIMEUTC_UART1",
        id: 0x2091005C,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_TIMEUTC_UART2",
        id: 0x2091005D,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_TIMEUTC_USB",
        id: 0x2091005E,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_VELECEF_I2C",
        id: 0x2091003D,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_VELECEF_SPI",
        id: 0x20910041,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_VELECEF_UART1",
        id: 0x2091003E,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_VELECEF_UART2",
        id: 0x2091003F,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_VELECEF_USB",
        id: 0x20910040,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_VELNED_I2C",
        id: 0x20910042,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_VELNED_SPI",
        id: 0x20910046,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_VELNED_UART1",
        id: 0x20910043,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_VELNED_UART2",
        id: 0x20910044,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_NAV_VELNED_USB",
        id: 0x20910045,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_MEASX_I2C",
        id: 0x20910204,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_MEASX_SPI",
        id: 0x20910208,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_MEASX_UART1",
        id: 0x20910205,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_MEASX_UART2",
        id: 0x20910206,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_MEASX_USB",
        id: 0x20910207,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_RAWX_I2C",
        id: 0x209102A4,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_RAWX_SPI",
        id: 0x209102A8,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_RAWX_UART1",
        id: 0x209102A5,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_RAWX_UART2",
        id: 0x209102A6,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_RAWX_USB",
        id: 0x209102A7,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_RTCM_I2C",
        id: 0x20910268,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_RTCM_SPI",
        id: 0x2091026C,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_RTCM_UART1",
        id: 0x20910269,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_RTCM_UART2",
        id: 0x2091026A,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_RTCM_USB",
        id: 0x2091026B,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_SFRBX_I2C",
        id: 0x20910231,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_SFRBX_SPI",
        id: 0x20910235,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_SFRBX_UART1",
        id: 0x20910232,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_SFRBX_UART2",
        id: 0x20910233,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_RXM_SFRBX_USB",
        id: 0x20910234,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_TIM_TM2_I2C",
        id: 0x20910178,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_TIM_TM2_SPI",
        id: 0x2091017C,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_TIM_TM2_UART1",
        id: 0x20910179,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_TIM_TM2_UART2",
        id: 0x2091017A,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_TIM_TM2_USB",
        id: 0x2091017B,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_TIM_TP_I2C",
        id: 0x2091017D,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_TIM_TP_SPI",
        id: 0x20910181,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_TIM_TP_UART1",
        id: 0x2091017E,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_TIM_TP_UART2",
        id: 0x2091017F,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-MSGOUT-UBX_TIM_TP_USB",
        id: 0x20910180,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-NAVSPG-ACKAIDING",
        id: 0x10110025,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-NAVSPG-CONSTR_ALT",
        id: 0x401100C1,
        kind: KeyType::I4,
    },
    ValsetKey {
        name: "CFG-NAVSPG-CONSTR_ALTVAR",
        id: 0x401100C2,
        kind: KeyType::U4,
    },
    ValsetKey {
        name: "CFG-NAVSPG-CONSTR_DGNSSTO",
        id: 0x201100C4,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-NAVSPG-DYNMODEL",
        id: 0x20110021,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-NAVSPG-FIXMODE",
        id: 0x20110011,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-NAVSPG-INFIL_CNOTHRS",
        id: 0x201100AB,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-NAVSPG-INFIL_MAXSVS",
        id: 0x201100A2,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-NAVSPG-INFIL_MINCNO",
        id: 0x201100A3,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-NAVSPG-INFIL_MINELEV",
        id: 0x201100A4,
        kind: KeyType::I1,
    },
    ValsetKey {
        name: "CFG-NAVSPG-INFIL_MINSVS",
        id: 0x201100A1,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-NAVSPG-INFIL_NCNOTHRS",
        id: 0x201100AA,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-NAVSPG-INIFIX3D",
        id: 0x10110013,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-NAVSPG-OUTFIL_FACC",
        id: 0x301100B5,
        kind: KeyType::U2,
    },
    ValsetKey {
        name: "CFG-NAVSPG-OUTFIL_PACC",
        id: 0x301100B3,
        kind: KeyType::U2,
    },
    ValsetKey {
        name: "CFG-NAVSPG-OUTFIL_PDOP",
        id: 0x301100B1,
        kind: KeyType::U2,
    },
    ValsetKey {
        name: "CFG-NAVSPG-OUTFIL_TACC",
        id: 0x301100B4,
        kind: KeyType::U2,
    },
    ValsetKey {
        name: "CFG-NAVSPG-OUTFIL_TDOP",
        id: 0x301100B2,
        kind: KeyType::U2,
    },
    ValsetKey {
        name: "CFG-NAVSPG-SIGATTCOMP",
        id: 0x201100D6,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-NAVSPG-USE_USRDAT",
        id: 0x10110061,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-NAVSPG-USRDAT_DX",
        id: 0x40110064,
        kind: KeyType::R4,
    },
    ValsetKey {
        name: "CFG-NAVSPG-USRDAT_DY",
        id: 0x40110065,
        kind: KeyType::R4,
    },
    ValsetKey {
        name: "CFG-NAVSPG-USRDAT_DZ",
        id: 0x40110066,
        kind: KeyType::R4,
    },
    ValsetKey {
        name: "CFG-NAVSPG-USRDAT_FLAT",
        id: 0x50110063,
        kind: KeyType::R8,
    },
    ValsetKey {
        name: "CFG-NAVSPG-USRDAT_MAJA",
        id: 0x50110062,
        kind: KeyType::R8,
    },
    ValsetKey {
        name: "CFG-NAVSPG-USRDAT_ROTX",
        id: 0x40110067,
        kind: KeyType::R4,
    },
    ValsetKey {
        name: "CFG-NAVSPG-USRDAT_ROTY",
        id: 0x40110068,
        kind: KeyType::R4,
    },
    ValsetKey {
        name: "CFG-NAVSPG-USRDAT_ROTZ",
        id: 0x40110069,
        kind: KeyType::R4,
    },
    ValsetKey {
        name: "CFG-NAVSPG-USRDAT_SCALE",
        id: 0x4011006A,
        kind: KeyType::R4,
    },
    ValsetKey {
        name: "CFG-NAVSPG-UTCSTANDARD",
        id: 0x2011001C,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-NAVSPG-WKNROLLOVER",
        id: 0x30110017,
        kind: KeyType::U2,
    },
    ValsetKey {
        name: "CFG-ODO-COGLPGAIN",
        id: 0x20220032,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-ODO-COGMAXPOSACC",
        id: 0x20220022,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-ODO-COGMAXSPEED",
        id: 0x20220021,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-ODO-OUTLPCOG",
        id: 0x10220004,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-ODO-OUTLPVEL",
        id: 0x10220003,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-ODO-PROFILE",
        id: 0x20220005,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-ODO-USE_COG",
        id: 0x10220002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-ODO-USE_ODO",
        id: 0x10220001,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-ODO-VELLPGAIN",
        id: 0x20220031,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-RATE-MEAS",
        id: 0x30210001,
        kind: KeyType::U2,
    },
    ValsetKey {
        name: "CFG-RATE-NAV",
        id: 0x30210002,
        kind: KeyType::U2,
    },
    ValsetKey {
        name: "CFG-RATE-TIMEREF",
        id: 0x20210003,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-SBAS-PRNSCANMASK",
        id: 0x50360006,
        kind: KeyType::U8,
    },
    ValsetKey {
        name: "CFG-SBAS-USE_DIFFCORR",
        id: 0x10360004,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SBAS-USE_INTEGRITY",
        id: 0x10360005,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SBAS-USE_RANGING",
        id: 0x10360003,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SBAS-USE_TESTMODE",
        id: 0x10360002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-BDS_B1_ENA",
        id: 0x1031000D,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-BDS_B2_ENA",
        id: 0x1031000E,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-BDS_ENA",
        id: 0x10310022,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-GAL_E1_ENA",
        id: 0x10310007,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-GAL_E5B_ENA",
        id: 0x1031000A,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-GAL_ENA",
        id: 0x10310021,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-GLO_ENA",
        id: 0x10310025,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-GLO_L1_ENA",
        id: 0x10310018,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-GLO_L2_ENA",
        id: 0x1031001A,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-GPS_ENA",
        id: 0x1031001F,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-GPS_L1CA_ENA",
        id: 0x10310001,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-GPS_L2C_ENA",
        id: 0x10310003,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-QZSS_ENA",
        id: 0x10310024,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-QZSS_L1CA_ENA",
        id: 0x10310012,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-QZSS_L1S_ENA",
        id: 0x10310014,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-QZSS_L2C_ENA",
        id: 0x10310015,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-SBAS_ENA",
        id: 0x10310020,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SIGNAL-SBAS_L1CA_ENA",
        id: 0x10310005,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SPI-CPHASE",
        id: 0x10640003,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SPI-CPOLARITY",
        id: 0x10640002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SPI-ENABLED",
        id: 0x10640006,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SPI-EXTENDEDTIMEOUT",
        id: 0x10640005,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SPI-MAXFF",
        id: 0x20640001,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-SPIINPROT-NMEA",
        id: 0x10790002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SPIINPROT-RTCM3X",
        id: 0x10790004,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SPIINPROT-UBX",
        id: 0x10790001,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SPIOUTPROT-NMEA",
        id: 0x107A0002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SPIOUTPROT-RTCM3X",
        id: 0x107A0004,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-SPIOUTPROT-UBX",
        id: 0x107A0001,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-TP-ALIGN_TO_TOW_TP1",
        id: 0x1005000A,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-TP-ANT_CABLEDELAY",
        id: 0x30050001,
        kind: KeyType::I2,
    },
    ValsetKey {
        name: "CFG-TP-DUTY_LOCK_TP1",
        id: 0x5005002B,
        kind: KeyType::R8,
    },
    ValsetKey {
        name: "CFG-TP-DUTY_TP1",
        id: 0x5005002A,
        kind: KeyType::R8,
    },
    ValsetKey {
        name: "CFG-TP-FREQ_LOCK_TP1",
        id: 0x40050025,
        kind: KeyType::U4,
    },
    ValsetKey {
        name: "CFG-TP-FREQ_TP1",
        id: 0x40050024,
        kind: KeyType::U4,
    },
    ValsetKey {
        name: "CFG-TP-LEN_LOCK_TP1",
        id: 0x40050005,
        kind: KeyType::U4,
    },
    ValsetKey {
        name: "CFG-TP-LEN_TP1",
        id: 0x40050004,
        kind: KeyType::U4,
    },
    ValsetKey {
        name: "CFG-TP-PERIOD_LOCK_TP1",
        id: 0x40050003,
        kind: KeyType::U4,
    },
    ValsetKey {
        name: "CFG-TP-PERIOD_TP1",
        id: 0x40050002,
        kind: KeyType::U4,
    },
    ValsetKey {
        name: "CFG-TP-POL_TP1",
        id: 0x1005000B,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-TP-PULSE_DEF",
        id: 0x20050023,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-TP-PULSE_LENGTH_DEF",
        id: 0x20050030,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-TP-SYNC_GNSS_TP1",
        id: 0x10050008,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-TP-TIMEGRID_TP1",
        id: 0x2005000C,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-TP-TP1_ENA",
        id: 0x10050007,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-TP-USER_DELAY_TP1",
        id: 0x40050006,
        kind: KeyType::I4,
    },
    ValsetKey {
        name: "CFG-TP-USE_LOCKED_TP1",
        id: 0x10050009,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-TXREADY-ENABLED",
        id: 0x10A20001,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-TXREADY-INTERFACE",
        id: 0x20A20005,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-TXREADY-PIN",
        id: 0x20A20003,
        kind: KeyType::U1,
    },
    ValsetKey {
        name: "CFG-TXREADY-POLARITY",
        id: 0x10A20002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-TXREADY-THRESHOLD",
        id: 0x30A20004,
        kind: KeyType::U2,
    },
    ValsetKey {
        name: "CFG-UART1-BAUDRATE",
        id: 0x40520001,
        kind: KeyType::U4,
    },
    ValsetKey {
        name: "CFG-UART1-DATABITS",
        id: 0x20520003,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-UART1-ENABLED",
        id: 0x10520005,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-UART1-PARITY",
        id: 0x20520004,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-UART1-STOPBITS",
        id: 0x20520002,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-UART1INPROT-NMEA",
        id: 0x10730002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-UART1INPROT-RTCM3X",
        id: 0x10730004,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-UART1INPROT-UBX",
        id: 0x10730001,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-UART1OUTPROT-NMEA",
        id: 0x10740002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-UART1OUTPROT-RTCM3X",
        id: 0x10740004,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-UART1OUTPROT-UBX",
        id: 0x10740001,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-UART2-BAUDRATE",
        id: 0x40530001,
        kind: KeyType::U4,
    },
    ValsetKey {
        name: "CFG-UART2-DATABITS",
        id: 0x20530003,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-UART2-ENABLED",
        id: 0x10530005,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-UART2-PARITY",
        id: 0x20530004,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-UART2-STOPBITS",
        id: 0x20530002,
        kind: KeyType::E1,
    },
    ValsetKey {
        name: "CFG-UART2INPROT-NMEA",
        id: 0x10750002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-UART2INPROT-RTCM3X",
        id: 0x10750004,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-UART2INPROT-UBX",
        id: 0x10750001,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-UART2OUTPROT-NMEA",
        id: 0x10760002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-UART2OUTPROT-RTCM3X",
        id: 0x10760004,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-UART2OUTPROT-UBX",
        id: 0x10760001,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-USB-ENABLED",
        id: 0x10650001,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-USB-SELFPOW",
        id: 0x10650002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-USB-VBUSDET",
        id: 0x10650003,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-USBINPROT-NMEA",
        id: 0x10770002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-USBINPROT-RTCM3X",
        id: 0x10770004,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-USBINPROT-UBX",
        id: 0x10770001,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-USBOUTPROT-NMEA",
        id: 0x10780002,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-USBOUTPROT-RTCM3X",
        id: 0x10780004,
        kind: KeyType::L,
    },
    ValsetKey {
        name: "CFG-USBOUTPROT-UBX",
        id: 0x10780001,
        kind: KeyType::L,
    },
];
