/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Number of months in a Gregorian or Hijri year
pub const MONTHS_PER_YEAR: i64 = 12;

/// Number of days in a week, and columns in the day grid
pub const DAYS_PER_WEEK: u32 = 7;

/// Month number for January
pub const JANUARY: u8 = 1;

/// Shortest bookable stay, in nights
pub const MIN_NIGHTS: i64 = 1;

/// Length of the reservation hold shown in the booking form, in seconds
pub const HOLD_SECONDS: u32 = 600;

/// Julian day number of 1 Muharram 1 AH (civil epoch, 16 July 622 Julian)
pub(crate) const HIJRI_EPOCH_JDN: i64 = 1_948_440;
/// Offset from chrono's days-since-CE count to the Julian day number
pub(crate) const CE_TO_JDN: i64 = 1_721_425;
/// Days in one 30-year tabular Hijri cycle
pub(crate) const HIJRI_CYCLE_DAYS: i64 = 10_631;

/// First Hijri year covered by `UMM_AL_QURA_YEARS`
pub(crate) const UMM_AL_QURA_FIRST_YEAR: i32 = 1356;

/// Umm al-Qura calendar for 1356-1500 AH, one row per Hijri year:
/// the day 1 Muharram falls on (chrono's days since CE) and the month lengths.
/// Bit `n` of the mask is set when month `n + 1` has 30 days instead of 29.
pub(crate) const UMM_AL_QURA_YEARS: [(i32, u16); 145] = [
    (707_182, 0b1110_1010_1010), // 1356 (1937-03-14)
    (707_537, 0b1110_1001_0100), // 1357 (1938-03-04)
    (707_891, 0b1101_0010_1010), // 1358 (1939-02-21)
    (708_245, 0b1100_0101_0110), // 1359 (1940-02-10)
    (708_599, 0b0100_1010_1110), // 1360 (1941-01-29)
    (708_953, 0b1010_0110_1101), // 1361 (1942-01-18)
    (709_308, 0b0101_0110_1010), // 1362 (1943-01-08)
    (709_662, 0b1101_0101_0101), // 1363 (1943-12-28)
    (710_017, 0b1101_0100_1010), // 1364 (1944-12-17)
    (710_371, 0b1010_1001_0011), // 1365 (1945-12-06)
    (710_725, 0b0101_0010_1011), // 1366 (1946-11-25)
    (711_079, 0b1010_0101_1011), // 1367 (1947-11-14)
    (711_434, 0b0101_0011_1010), // 1368 (1948-11-03)
    (711_788, 0b0110_1011_0101), // 1369 (1949-10-23)
    (712_143, 0b1110_1010_1001), // 1370 (1950-10-13)
    (712_498, 0b1101_0101_0010), // 1371 (1951-10-03)
    (712_852, 0b1101_0010_1001), // 1372 (1952-09-21)
    (713_206, 0b1010_0101_0101), // 1373 (1953-09-10)
    (713_560, 0b0100_1010_1101), // 1374 (1954-08-30)
    (713_914, 0b0101_0110_1101), // 1375 (1955-08-19)
    (714_269, 0b1010_1110_1010), // 1376 (1956-08-08)
    (714_624, 0b0110_1110_0100), // 1377 (1957-07-29)
    (714_978, 0b1110_1101_0001), // 1378 (1958-07-18)
    (715_333, 0b1101_1010_0010), // 1379 (1959-07-08)
    (715_687, 0b1010_1010_1010), // 1380 (1960-06-26)
    (716_041, 0b1001_0101_1010), // 1381 (1961-06-15)
    (716_395, 0b0010_1101_1010), // 1382 (1962-06-04)
    (716_749, 0b0101_1011_1001), // 1383 (1963-05-24)
    (717_104, 0b1011_1011_0010), // 1384 (1964-05-13)
    (717_459, 0b0111_0110_0100), // 1385 (1965-05-03)
    (717_813, 0b0110_1100_1001), // 1386 (1966-04-22)
    (718_167, 0b0101_0101_0101), // 1387 (1967-04-11)
    (718_521, 0b0010_1010_1011), // 1388 (1968-03-30)
    (718_875, 0b0100_1101_1011), // 1389 (1969-03-19)
    (719_230, 0b1010_1011_1010), // 1390 (1970-03-09)
    (719_585, 0b0101_1011_0100), // 1391 (1971-02-27)
    (719_939, 0b1101_1010_1001), // 1392 (1972-02-16)
    (720_294, 0b1101_0101_0010), // 1393 (1973-02-05)
    (720_648, 0b1010_1010_0101), // 1394 (1974-01-25)
    (721_002, 0b1001_0010_1101), // 1395 (1975-01-14)
    (721_356, 0b0010_0110_1101), // 1396 (1976-01-03)
    (721_710, 0b1000_1110_1101), // 1397 (1976-12-22)
    (722_065, 0b0010_1101_1010), // 1398 (1977-12-12)
    (722_419, 0b1010_1101_0101), // 1399 (1978-12-01)
    (722_774, 0b1010_1010_0101), // 1400 (1979-11-21)
    (723_128, 0b1010_0100_1011), // 1401 (1980-11-09)
    (723_482, 0b0100_1001_0111), // 1402 (1981-10-29)
    (723_836, 0b1001_0011_0111), // 1403 (1982-10-18)
    (724_191, 0b0010_1011_0110), // 1404 (1983-10-08)
    (724_545, 0b1001_0111_0101), // 1405 (1984-09-26)
    (724_900, 0b1101_0110_1001), // 1406 (1985-09-16)
    (725_255, 0b1101_0101_0010), // 1407 (1986-09-06)
    (725_609, 0b1100_1001_0101), // 1408 (1987-08-26)
    (725_963, 0b1001_0010_1011), // 1409 (1988-08-14)
    (726_317, 0b0010_0101_1011), // 1410 (1989-08-03)
    (726_671, 0b0100_1101_1011), // 1411 (1990-07-23)
    (727_026, 0b1001_1101_0101), // 1412 (1991-07-13)
    (727_381, 0b0101_1101_0010), // 1413 (1992-07-02)
    (727_735, 0b1101_1010_0101), // 1414 (1993-06-21)
    (728_090, 0b1101_0100_1010), // 1415 (1994-06-11)
    (728_444, 0b1010_1001_0101), // 1416 (1995-05-31)
    (728_798, 0b0101_0100_1101), // 1417 (1996-05-19)
    (729_152, 0b1010_1010_1101), // 1418 (1997-05-08)
    (729_507, 0b0011_1010_1010), // 1419 (1998-04-28)
    (729_861, 0b1011_1101_0010), // 1420 (1999-04-17)
    (730_216, 0b1011_1100_0100), // 1421 (2000-04-06)
    (730_570, 0b1011_1000_1001), // 1422 (2001-03-26)
    (730_924, 0b1010_1001_0101), // 1423 (2002-03-15)
    (731_278, 0b0101_0010_1101), // 1424 (2003-03-04)
    (731_632, 0b0101_1010_1101), // 1425 (2004-02-21)
    (731_987, 0b1011_0110_1010), // 1426 (2005-02-10)
    (732_342, 0b0110_1101_0100), // 1427 (2006-01-31)
    (732_696, 0b1101_1100_1001), // 1428 (2007-01-20)
    (733_051, 0b1101_1001_0010), // 1429 (2008-01-10)
    (733_405, 0b1010_1010_0110), // 1430 (2008-12-29)
    (733_759, 0b1001_0101_0110), // 1431 (2009-12-18)
    (734_113, 0b0010_1010_1110), // 1432 (2010-12-07)
    (734_467, 0b0101_0110_1101), // 1433 (2011-11-26)
    (734_822, 0b0011_0110_1010), // 1434 (2012-11-15)
    (735_176, 0b1011_0101_0101), // 1435 (2013-11-04)
    (735_531, 0b1010_1010_1010), // 1436 (2014-10-25)
    (735_885, 0b1001_0100_1101), // 1437 (2015-10-14)
    (736_239, 0b0100_1001_1101), // 1438 (2016-10-02)
    (736_593, 0b1001_0101_1101), // 1439 (2017-09-21)
    (736_948, 0b0010_1011_1010), // 1440 (2018-09-11)
    (737_302, 0b0101_1011_0101), // 1441 (2019-08-31)
    (737_657, 0b0101_1010_1010), // 1442 (2020-08-20)
    (738_011, 0b1101_0101_0101), // 1443 (2021-08-09)
    (738_366, 0b1010_1001_1010), // 1444 (2022-07-30)
    (738_720, 0b1001_0010_1110), // 1445 (2023-07-19)
    (739_074, 0b0010_0110_1110), // 1446 (2024-07-07)
    (739_428, 0b0101_0101_1101), // 1447 (2025-06-26)
    (739_783, 0b1010_1101_1010), // 1448 (2026-06-16)
    (740_138, 0b0110_1101_0100), // 1449 (2027-06-06)
    (740_492, 0b0110_1010_0101), // 1450 (2028-05-25)
    (740_846, 0b1011_0010_0111), // 1451 (2029-05-14)
    (741_201, 0b1010_0100_1101), // 1452 (2030-05-04)
    (741_555, 0b0100_1010_1101), // 1453 (2031-04-23)
    (741_909, 0b0101_0110_1101), // 1454 (2032-04-11)
    (742_264, 0b1011_0101_1010), // 1455 (2033-04-01)
    (742_619, 0b0111_0101_0100), // 1456 (2034-03-22)
    (742_973, 0b1111_0100_1001), // 1457 (2035-03-11)
    (743_328, 0b1110_1001_0010), // 1458 (2036-02-29)
    (743_682, 0b1101_0010_0110), // 1459 (2037-02-17)
    (744_036, 0b1010_0101_0110), // 1460 (2038-02-06)
    (744_390, 0b0011_0101_0110), // 1461 (2039-01-26)
    (744_744, 0b0110_1011_0101), // 1462 (2040-01-15)
    (745_099, 0b1011_1010_1010), // 1463 (2041-01-04)
    (745_454, 0b1011_1001_0010), // 1464 (2041-12-25)
    (745_808, 0b1011_0010_0101), // 1465 (2042-12-14)
    (746_162, 0b0110_1000_1011), // 1466 (2043-12-03)
    (746_516, 0b1010_1001_1011), // 1467 (2044-11-21)
    (746_871, 0b0101_0101_1010), // 1468 (2045-11-11)
    (747_225, 0b1010_1101_1010), // 1469 (2046-10-31)
    (747_580, 0b0101_1011_0100), // 1470 (2047-10-21)
    (747_934, 0b1101_1010_1001), // 1471 (2048-10-09)
    (748_289, 0b1011_0101_0010), // 1472 (2049-09-29)
    (748_643, 0b1010_1001_1010), // 1473 (2050-09-18)
    (748_997, 0b0101_0011_0110), // 1474 (2051-09-07)
    (749_351, 0b0010_0111_0110), // 1475 (2052-08-26)
    (749_705, 0b0101_0111_0101), // 1476 (2053-08-15)
    (750_060, 0b1010_1111_0010), // 1477 (2054-08-05)
    (750_415, 0b0110_1101_0100), // 1478 (2055-07-26)
    (750_769, 0b0110_1010_1001), // 1479 (2056-07-14)
    (751_123, 0b0101_0101_0101), // 1480 (2057-07-03)
    (751_477, 0b0010_1010_1101), // 1481 (2058-06-22)
    (751_831, 0b0100_1011_1101), // 1482 (2059-06-11)
    (752_186, 0b1001_1011_1010), // 1483 (2060-05-31)
    (752_541, 0b0101_0111_0100), // 1484 (2061-05-21)
    (752_895, 0b1011_0110_1001), // 1485 (2062-05-10)
    (753_250, 0b1011_0101_0010), // 1486 (2063-04-30)
    (753_604, 0b1010_1001_0101), // 1487 (2064-04-18)
    (753_958, 0b0101_0010_1101), // 1488 (2065-04-07)
    (754_312, 0b1010_0101_1101), // 1489 (2066-03-27)
    (754_667, 0b0100_1101_1010), // 1490 (2067-03-17)
    (755_021, 0b1010_1101_1001), // 1491 (2068-03-05)
    (755_376, 0b0110_1011_0010), // 1492 (2069-02-23)
    (755_730, 0b1110_1001_0101), // 1493 (2070-02-12)
    (756_085, 0b1110_0010_1010), // 1494 (2071-02-02)
    (756_439, 0b1100_1001_0110), // 1495 (2072-01-22)
    (756_793, 0b1001_0010_1110), // 1496 (2073-01-10)
    (757_147, 0b1010_1010_1101), // 1497 (2073-12-30)
    (757_502, 0b0101_0110_1010), // 1498 (2074-12-20)
    (757_856, 0b1101_0110_0101), // 1499 (2075-12-09)
    (758_211, 0b1101_0100_1010), // 1500 (2076-11-28)
];

/// Selection display separator (ISO 8601 interval form)
pub const RANGE_SEPARATOR: char = '/';
