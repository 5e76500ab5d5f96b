/*!
# Numbers

Numbers are five bytes long.

Whole numbers from -65535 to 65535 use a short form:

```text
0, sign, low byte, high byte, 0
```

The sign byte is 0 for positive numbers and 255 for negative ones. The
two middle bytes are the magnitude, so 1234 is `0 0 210 4 0` and -5 is
`0 255 5 0 0`.

Every other number is stored as an exponent and a mantissa:

```text
exponent + 128, mantissa (4 bytes, most significant first)
```

The mantissa is a binary fraction from 0.5 up to 1. Its top bit is always
set so that bit holds the sign instead. This gives a little over nine
significant decimal digits. Numbers too large or too small for an
exponent from -127 to 127 are stored as zero, which is five zero bytes.

When numbers are shown they have at most eight significant digits, with
an exponent outside 0.0001 to 99999999.

*/
